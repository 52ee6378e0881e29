//! Main assembler logic

use crate::encoder::encode_opcodes;
use crate::error::Result;
use crate::parser::parse;
use judecca_spec::RawPage;

/// Assemble program text into raw pages, page 0 first
pub fn assemble(text: &str) -> Result<Vec<RawPage>> {
    let opcodes = parse(text)?;
    Ok(encode_opcodes(&opcodes))
}
