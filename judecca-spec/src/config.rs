//! # Resource Limits
//!
//! The instruction stream and the tape are unbounded by definition. The only
//! way a run ends is by hitting one of these limits.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_PAGE, DEFAULT_MAX_TAPE, NOLIMIT_ENV_VAR};

/// Resource limits. `None` disables the corresponding bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limits {
    /// Highest page index that may be accessed
    pub max_page: Option<u64>,
    /// Largest distance of the tape head from the start cell, in either direction
    pub max_tape: Option<u64>,
}

impl Limits {
    /// No bounds at all
    pub const UNLIMITED: Self = Self {
        max_page: None,
        max_tape: None,
    };

    /// Create limits with explicit bounds
    pub const fn new(max_page: Option<u64>, max_tape: Option<u64>) -> Self {
        Self { max_page, max_tape }
    }

    /// Limits with no bounds
    pub const fn unlimited() -> Self {
        Self::UNLIMITED
    }

    /// Default limits, or no limits at all when `nolimit` is set
    pub fn from_nolimit_flag(nolimit: bool) -> Self {
        if nolimit {
            Self::UNLIMITED
        } else {
            Self::default()
        }
    }

    /// Read the [`NOLIMIT_ENV_VAR`] switch. Only the exact value `1` disables limits.
    pub fn from_env() -> Self {
        let nolimit = std::env::var_os(NOLIMIT_ENV_VAR).is_some_and(|value| value == "1");
        Self::from_nolimit_flag(nolimit)
    }

}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_page: Some(DEFAULT_MAX_PAGE),
            max_tape: Some(DEFAULT_MAX_TAPE),
        }
    }
}
