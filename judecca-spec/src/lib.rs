//! # Judecca Specification
//!
//! Core definitions for the Judecca instruction stream.
//!
//! A Judecca "program" is never executed directly. Its bytes are hashed into a
//! 32-byte seed, and the seed (together with the source) deterministically
//! derives an unbounded sequence of 256-bit pages. Every nibble of a page is
//! one instruction.
//!
//! ## Key Features
//! - Iterated SHA-256 seed derivation (2,000,000 rounds)
//! - Two-round page derivation keyed by page index
//! - 16 opcodes, one per nibble; 0xA-0xF reserved as no-ops
//! - Resource limits for page index and tape extent
//!
//! ## Example
//!
//! ```rust
//! use judecca_spec::{decode_page, generate_page, Opcode, Seed};
//!
//! let source = b"Hello, world!";
//! let seed = Seed::from_bytes([0u8; 32]);
//! let page = decode_page(&generate_page(source, &seed, 0));
//! assert_eq!(page.len(), 64);
//! assert!(page.iter().all(|op| Opcode::from_nibble(op.to_nibble()) == *op));
//! ```

pub mod config;
pub mod error;
pub mod opcode;
pub mod page;

pub use config::Limits;
pub use error::{Result, SpecError};
pub use opcode::Opcode;
pub use page::{
    check_source_len, decode_page, derive_seed, derive_seed_with_iterations, encode_page,
    encode_page_index, generate_page, Page, RawPage, Seed,
};

/// Size of a SHA-256 digest, and therefore of a raw page, in bytes
pub const PAGE_BYTES: usize = 32;

/// Number of instructions per page (two nibbles per byte)
pub const PAGE_SIZE: usize = PAGE_BYTES * 2;

/// Total number of SHA-256 invocations used to derive the seed
pub const SEED_HASH_ITERATIONS: u64 = 2_000_000;

/// Largest accepted source length: 2^60 - 1 bytes
pub const MAX_SOURCE_LEN: u64 = (1 << 60) - 1;

/// Default bound on the page index
pub const DEFAULT_MAX_PAGE: u64 = 1 << 20;

/// Default bound on the tape head distance from the start cell
pub const DEFAULT_MAX_TAPE: u64 = 1 << 20;

/// Highest page index whose instructions (and their successors) fit a `u64`
pub const MAX_ADDRESSABLE_PAGE: u64 = u64::MAX / PAGE_SIZE as u64 - 1;

/// Environment switch that disables all resource limits when set to `1`
pub const NOLIMIT_ENV_VAR: &str = "JUDECCA_RUN_NOLIMIT";

/// Page index containing the given instruction
#[inline]
pub const fn page_of(instruction: u64) -> u64 {
    instruction / PAGE_SIZE as u64
}

/// Offset of the given instruction within its page
#[inline]
pub const fn offset_of(instruction: u64) -> usize {
    (instruction % PAGE_SIZE as u64) as usize
}
