//! Opcode packing into raw pages
//!
//! Two opcodes per byte, first one in the high nibble. The last page is
//! padded with reserved no-ops.

use judecca_spec::{encode_page, Opcode, Page, RawPage, PAGE_SIZE};

/// Opcode used to fill the tail of the last page
pub const PADDING: Opcode = Opcode::ReservedB;

/// Pack `opcodes` into as many pages as needed
pub fn encode_opcodes(opcodes: &[Opcode]) -> Vec<RawPage> {
    opcodes
        .chunks(PAGE_SIZE)
        .map(|chunk| {
            let mut page: Page = [PADDING; PAGE_SIZE];
            page[..chunk.len()].copy_from_slice(chunk);
            encode_page(&page)
        })
        .collect()
}
