//! Page listings

use std::ops::Range;

use crate::error::{DisassemblerError, Result};
use crate::formatter::{format_page, Style};
use judecca_spec::{check_source_len, decode_page, generate_page, RawPage, Seed, MAX_ADDRESSABLE_PAGE};

/// List pages `pages` of the program hashed from `source` under `seed`
///
/// One line per page: index, hex digest, symbols.
pub fn disassemble(source: &[u8], seed: &Seed, pages: Range<u64>, style: Style) -> Result<String> {
    check_source_len(source.len() as u64)?;
    if pages.start > pages.end || pages.end > MAX_ADDRESSABLE_PAGE + 1 {
        return Err(DisassemblerError::InvalidRange {
            start: pages.start,
            end: pages.end,
        });
    }

    let mut output = String::new();
    output.push_str("; Judecca page listing\n");
    output.push_str(&format!("; Seed: {}\n", seed.to_hex()));
    output.push_str(&format!("; Pages: {}..{}\n", pages.start, pages.end));

    for index in pages {
        push_line(&mut output, index, &generate_page(source, seed, index), style);
    }

    Ok(output)
}

/// List raw pages numbered from 0, e.g. the output of the assembler
pub fn disassemble_pages(pages: &[RawPage], style: Style) -> String {
    let mut output = String::new();
    for (index, raw) in pages.iter().enumerate() {
        push_line(&mut output, index as u64, raw, style);
    }
    output
}

fn push_line(output: &mut String, index: u64, raw: &RawPage, style: Style) {
    output.push_str(&format!("{:>8}  ", index));
    for byte in raw {
        output.push_str(&format!("{:02X}", byte));
    }
    output.push_str(&format!("  {}\n", format_page(&decode_page(raw), style)));
}
