//! Seed derivation, page derivation and nibble decoding
//!
//! ```text
//! seed     = SHA256^2_000_000(source)
//! page_pre = SHA256(seed     || page_index_le || source)
//! page     = SHA256(page_pre || page_index_le || source)
//! ```
//!
//! The page index is little-endian, padded to a multiple of 8 bytes and at
//! least 8 bytes long. Every function here is pure.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{Result, SpecError};
use crate::opcode::Opcode;
use crate::{MAX_SOURCE_LEN, PAGE_BYTES, PAGE_SIZE, SEED_HASH_ITERATIONS};

/// One page as produced by the hash: 32 bytes, 64 nibbles
pub type RawPage = [u8; PAGE_BYTES];

/// One decoded page: 64 opcodes
pub type Page = [Opcode; PAGE_SIZE];

/// 32-byte seed derived from the source code
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Wrap raw seed bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Seed(bytes)
    }

    /// Parse a 64-digit hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        if hex.len() != 64 {
            return Err(SpecError::InvalidHexLength {
                expected: 64,
                found: hex.len(),
            });
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let hi = hex_value(chunk[0])?;
            let lo = hex_value(chunk[1])?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Seed(bytes))
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

fn hex_value(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(SpecError::InvalidHexDigit(digit as char)),
    }
}

/// Reject sources longer than 2^60 - 1 bytes
pub fn check_source_len(len: u64) -> Result<()> {
    if len > MAX_SOURCE_LEN {
        return Err(SpecError::SourceTooLong {
            len,
            max: MAX_SOURCE_LEN,
        });
    }
    Ok(())
}

/// Derive the seed with the standard iteration count
pub fn derive_seed(source: &[u8]) -> Seed {
    derive_seed_with_iterations(source, SEED_HASH_ITERATIONS)
}

/// Derive a seed using `iterations` SHA-256 invocations in total.
///
/// The first invocation hashes `source`; each following one hashes the
/// previous digest. An iteration count of 0 is treated as 1.
pub fn derive_seed_with_iterations(source: &[u8], iterations: u64) -> Seed {
    let mut digest: [u8; 32] = Sha256::digest(source).into();
    for _ in 1..iterations {
        digest = Sha256::digest(digest).into();
    }
    Seed(digest)
}

/// Little-endian page index, in whole 8-byte groups, at least one group
pub fn encode_page_index(page_index: u128) -> Vec<u8> {
    let significant = 16 - (page_index.leading_zeros() / 8) as usize;
    let groups = significant.div_ceil(8).max(1);
    page_index.to_le_bytes()[..groups * 8].to_vec()
}

/// Derive the raw bytes of page `page_index`
pub fn generate_page(source: &[u8], seed: &Seed, page_index: u64) -> RawPage {
    let index_bytes = encode_page_index(u128::from(page_index));

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(&index_bytes);
    hasher.update(source);
    let page_pre: [u8; 32] = hasher.finalize().into();

    let mut hasher = Sha256::new();
    hasher.update(page_pre);
    hasher.update(&index_bytes);
    hasher.update(source);
    hasher.finalize().into()
}

/// Split every byte into its high nibble, then its low nibble
pub fn decode_page(raw: &RawPage) -> Page {
    let mut page = [Opcode::Inc; PAGE_SIZE];
    for (i, byte) in raw.iter().enumerate() {
        page[2 * i] = Opcode::from_nibble(byte >> 4);
        page[2 * i + 1] = Opcode::from_nibble(*byte);
    }
    page
}

/// Pack opcodes back into nibbles
pub fn encode_page(page: &Page) -> RawPage {
    let mut raw = [0u8; PAGE_BYTES];
    for (i, pair) in page.chunks_exact(2).enumerate() {
        raw[i] = (pair[0].to_nibble() << 4) | pair[1].to_nibble();
    }
    raw
}
