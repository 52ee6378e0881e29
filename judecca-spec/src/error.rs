//! # Error Types for Judecca

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Source too long: {len} bytes (maximum {max})")]
    SourceTooLong { len: u64, max: u64 },

    #[error("Invalid hex length: expected {expected} digits, found {found}")]
    InvalidHexLength { expected: usize, found: usize },

    #[error("Invalid hex digit: {0:?}")]
    InvalidHexDigit(char),
}

pub type Result<T> = std::result::Result<T, SpecError>;
