//! Disassembler errors

use judecca_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Invalid page range: {start}..{end}")]
    InvalidRange { start: u64, end: u64 },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
