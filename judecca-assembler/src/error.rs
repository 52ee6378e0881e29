//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
