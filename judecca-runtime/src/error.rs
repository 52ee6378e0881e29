//! Runtime error types for Judecca
//!
//! Every error ends the run. [`RuntimeError::exit_code`] maps each kind to
//! the process exit status used by the command-line front end.

use judecca_spec::SpecError;
use thiserror::Error;

/// Invalid invocation or unusable program
pub const EXIT_USAGE: u8 = 1;
/// Page index or tape extent exceeded its bound
pub const EXIT_LIMIT: u8 = 2;
/// The I/O device failed
pub const EXIT_IO: u8 = 3;
/// A jump table invariant was violated
pub const EXIT_INTERNAL: u8 = 4;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Limit exceeded: tried to access page {page} (limit {limit})")]
    PageLimitExceeded { page: u64, limit: u64 },

    #[error("Limit exceeded: tried to move the head to {position} (limit {limit})")]
    TapeLimitExceeded { position: i64, limit: u64 },

    #[error("Jump table has no entry for instruction {index}")]
    MissingJumpEntry { index: u64 },

    #[error("Jump table entry for instruction {index} is already resolved")]
    JumpEntryOverwrite { index: u64 },

    #[error("Open bracket at instruction {index} has no pending match to scan for")]
    UnresolvableJump { index: u64 },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Page or tape bound exceeded
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            RuntimeError::PageLimitExceeded { .. } | RuntimeError::TapeLimitExceeded { .. }
        )
    }

    /// Jump table invariant violated; always an interpreter bug
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RuntimeError::MissingJumpEntry { .. }
                | RuntimeError::JumpEntryOverwrite { .. }
                | RuntimeError::UnresolvableJump { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            RuntimeError::SpecError(_) => EXIT_USAGE,
            RuntimeError::PageLimitExceeded { .. } | RuntimeError::TapeLimitExceeded { .. } => {
                EXIT_LIMIT
            }
            RuntimeError::IoError(_) => EXIT_IO,
            RuntimeError::MissingJumpEntry { .. }
            | RuntimeError::JumpEntryOverwrite { .. }
            | RuntimeError::UnresolvableJump { .. } => EXIT_INTERNAL,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
