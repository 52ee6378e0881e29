//! Hex page dumps back to page bytes

use crate::error::Result;
use judecca_spec::{decode_page, Page, RawPage, Seed};

/// Parse a 64-digit hex dump of one page
///
/// Case-insensitive; whitespace anywhere in the dump is ignored.
pub fn decode_hex(dump: &str) -> Result<RawPage> {
    let digits: String = dump.chars().filter(|c| !c.is_whitespace()).collect();
    // Seeds and pages share the 32-byte hex layout
    let bytes = Seed::from_hex(&digits)?;
    Ok(*bytes.as_bytes())
}

/// Parse a hex dump straight into opcodes
pub fn decode(dump: &str) -> Result<Page> {
    Ok(decode_page(&decode_hex(dump)?))
}
