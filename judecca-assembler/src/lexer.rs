//! # Lexer for Judecca program text
//!
//! One token per instruction symbol. Blanks and `#` comments are skipped;
//! newlines are kept so errors can report a line.

use judecca_spec::Opcode;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    #[token("+")]
    Inc,

    #[token("-")]
    Dec,

    #[token("<")]
    Left,

    #[token(">")]
    Right,

    #[token("[")]
    Open,

    #[token("]")]
    Close,

    #[token(".")]
    Out,

    #[token(",")]
    In,

    #[token("$")]
    Break,

    #[token("|")]
    Pivot,

    #[token("%")]
    Nop,

    /// Reserved no-op, assembled as 0xB
    #[token("_")]
    Reserved,

    #[token("\n")]
    Newline,
}

impl Token {
    /// Opcode emitted for this token, `None` for layout tokens
    pub fn opcode(self) -> Option<Opcode> {
        match self {
            Token::Inc => Some(Opcode::Inc),
            Token::Dec => Some(Opcode::Dec),
            Token::Left => Some(Opcode::Left),
            Token::Right => Some(Opcode::Right),
            Token::Open => Some(Opcode::Open),
            Token::Close => Some(Opcode::Close),
            Token::Out => Some(Opcode::Out),
            Token::In => Some(Opcode::In),
            Token::Break => Some(Opcode::Break),
            Token::Pivot => Some(Opcode::Pivot),
            Token::Nop => Some(Opcode::Nop),
            Token::Reserved => Some(Opcode::ReservedB),
            Token::Newline => None,
        }
    }
}
