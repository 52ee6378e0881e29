//! Parser from program text to opcodes

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use judecca_spec::Opcode;
use logos::Logos;

/// Parse program text into the opcode stream it spells out
pub fn parse(text: &str) -> Result<Vec<Opcode>> {
    let mut opcodes = Vec::with_capacity(text.len());
    let mut lexer = Token::lexer(text);
    let mut line = 1;
    let mut line_start = 0;

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Newline) => {
                line += 1;
                line_start = lexer.span().end;
            }
            Ok(token) => opcodes.extend(token.opcode()),
            Err(()) => {
                let span = lexer.span();
                let column = text[line_start..span.start].chars().count() + 1;
                return Err(AssemblerError::SyntaxError {
                    line,
                    column,
                    message: format!("unexpected character {:?}", lexer.slice()),
                });
            }
        }
    }

    Ok(opcodes)
}
