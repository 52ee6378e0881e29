//! Opcode formatting to symbol text

use judecca_spec::{Opcode, Page};

/// How much of a page to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Every opcode, one symbol each
    #[default]
    Raw,
    /// Only opcodes with an effect: `_`, `%` and `$` are dropped
    Stripped,
}

impl Style {
    pub fn shows(self, opcode: Opcode) -> bool {
        match self {
            Style::Raw => true,
            Style::Stripped => !(opcode.is_nop() || opcode == Opcode::Break),
        }
    }
}

/// Listing symbol for `opcode`
pub fn symbol(opcode: Opcode) -> char {
    opcode.symbol()
}

/// Format a run of opcodes
pub fn format_opcodes(opcodes: &[Opcode], style: Style) -> String {
    opcodes
        .iter()
        .filter(|op| style.shows(**op))
        .map(|op| symbol(*op))
        .collect()
}

/// Format one decoded page
pub fn format_page(page: &Page, style: Style) -> String {
    format_opcodes(page, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let symbols: String = Opcode::ALL.iter().map(|op| symbol(*op)).collect();
        assert_eq!(symbols, "+-<>[].,$|%_____");
    }

    #[test]
    fn test_stripped_drops_inert_opcodes() {
        let ops = [Opcode::Break, Opcode::Inc, Opcode::Nop, Opcode::ReservedF, Opcode::Pivot];
        assert_eq!(format_opcodes(&ops, Style::Raw), "$+%_|");
        assert_eq!(format_opcodes(&ops, Style::Stripped), "+|");
    }

    #[test]
    fn test_page_length() {
        let page = [Opcode::ReservedC; 64];
        assert_eq!(format_page(&page, Style::Raw).len(), 64);
        assert!(format_page(&page, Style::Stripped).is_empty());
    }
}
