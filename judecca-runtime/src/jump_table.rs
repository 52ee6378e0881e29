//! Monotone jump table
//!
//! The instruction stream has no end, so brackets are matched incrementally:
//! pages are scanned strictly in order, each exactly once, and the scan only
//! moves forward when a lookup needs it. Open brackets whose match has not
//! been seen yet stay on the `open` stack across pages.

use std::collections::HashMap;

use crate::error::{Result, RuntimeError};
use crate::generator::PageGenerator;
use crate::page_cache::PageCache;
use judecca_spec::{page_of, Opcode, PAGE_SIZE};
use tracing::debug;

/// Jump destination recorded for a bracket instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    /// Open bracket whose match has not been scanned yet
    Unresolved,
    /// Instruction to continue at
    Resolved(u64),
}

#[derive(Debug, Clone, Default)]
pub struct JumpTable {
    mapping: HashMap<u64, JumpTarget>,
    /// Open brackets waiting for a match, stored as `index + 1`
    open: Vec<u64>,
    /// Highest page scanned so far
    frontier: Option<u64>,
}

impl JumpTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frontier(&self) -> Option<u64> {
        self.frontier
    }

    /// Number of pages scanned so far
    pub fn pages_scanned(&self) -> u64 {
        self.frontier.map_or(0, |frontier| frontier + 1)
    }

    /// Open brackets still waiting for a match
    pub fn pending(&self) -> usize {
        self.open.len()
    }

    pub fn target(&self, index: u64) -> Option<JumpTarget> {
        self.mapping.get(&index).copied()
    }

    /// Number of bracket instructions recorded
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Scan the page after the frontier
    pub fn extend<G: PageGenerator>(&mut self, pages: &mut PageCache<G>) -> Result<()> {
        let next = self.frontier.map_or(0, |frontier| frontier + 1);
        let page = *pages.page(next)?;
        let frame = next * PAGE_SIZE as u64;

        for (offset, opcode) in page.iter().enumerate() {
            let index = frame + offset as u64;
            match self.normalise(*opcode) {
                Opcode::Open => {
                    self.open.push(index + 1);
                    self.mapping.insert(index, JumpTarget::Unresolved);
                }
                Opcode::Close => match self.open.pop() {
                    Some(dest) => {
                        self.mapping.insert(index, JumpTarget::Resolved(dest));
                        self.fill(dest - 1, index + 1)?;
                    }
                    None => {
                        self.mapping.insert(index, JumpTarget::Resolved(0));
                    }
                },
                _ => {}
            }
        }

        self.frontier = Some(next);
        debug!(page = next, pending = self.open.len(), "jump table extended");
        Ok(())
    }

    /// `|` closes the innermost pending loop, or opens a new one
    fn normalise(&self, opcode: Opcode) -> Opcode {
        match opcode {
            Opcode::Pivot if self.open.is_empty() => Opcode::Open,
            Opcode::Pivot => Opcode::Close,
            other => other,
        }
    }

    fn fill(&mut self, index: u64, dest: u64) -> Result<()> {
        match self.mapping.get_mut(&index) {
            Some(slot @ JumpTarget::Unresolved) => {
                *slot = JumpTarget::Resolved(dest);
                Ok(())
            }
            Some(JumpTarget::Resolved(_)) => Err(RuntimeError::JumpEntryOverwrite { index }),
            None => Err(RuntimeError::MissingJumpEntry { index }),
        }
    }

    /// Next instruction after the bracket at `index`
    ///
    /// Scans forward as far as needed, so a forward jump over a long loop
    /// body can generate many pages.
    pub fn resolve<G: PageGenerator>(
        &mut self,
        pages: &mut PageCache<G>,
        index: u64,
        head_is_zero: bool,
    ) -> Result<u64> {
        let page = page_of(index);
        while self.frontier.map_or(true, |frontier| frontier < page) {
            self.extend(pages)?;
        }

        let target = self
            .target(index)
            .ok_or(RuntimeError::MissingJumpEntry { index })?;

        match target {
            JumpTarget::Resolved(dest) if dest <= index => {
                Ok(if head_is_zero { index + 1 } else { dest })
            }
            _ if !head_is_zero => Ok(index + 1),
            JumpTarget::Resolved(dest) => Ok(dest),
            JumpTarget::Unresolved => self.scan_for_match(pages, index),
        }
    }

    fn scan_for_match<G: PageGenerator>(
        &mut self,
        pages: &mut PageCache<G>,
        index: u64,
    ) -> Result<u64> {
        loop {
            match self.target(index) {
                Some(JumpTarget::Resolved(dest)) => return Ok(dest),
                Some(JumpTarget::Unresolved) if self.open.is_empty() => {
                    return Err(RuntimeError::UnresolvableJump { index });
                }
                Some(JumpTarget::Unresolved) => self.extend(pages)?,
                None => return Err(RuntimeError::MissingJumpEntry { index }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FixedPages;
    use judecca_assembler::assemble;

    fn cache(text: &str) -> PageCache<FixedPages> {
        let pages = assemble(text).unwrap();
        PageCache::new(FixedPages::new(pages), None)
    }

    #[test]
    fn test_empty_loop_points_at_itself() {
        let mut pages = cache("[]");
        let mut table = JumpTable::new();

        assert_eq!(table.resolve(&mut pages, 0, true).unwrap(), 2);
        assert_eq!(table.resolve(&mut pages, 0, false).unwrap(), 1);
        assert_eq!(table.target(1), Some(JumpTarget::Resolved(1)));
        assert_eq!(table.resolve(&mut pages, 1, false).unwrap(), 1);
        assert_eq!(table.resolve(&mut pages, 1, true).unwrap(), 2);
    }

    #[test]
    fn test_unmatched_close_targets_zero() {
        let mut pages = cache("+]");
        let mut table = JumpTable::new();

        assert_eq!(table.resolve(&mut pages, 1, false).unwrap(), 0);
        assert_eq!(table.resolve(&mut pages, 1, true).unwrap(), 2);
        assert_eq!(table.target(1), Some(JumpTarget::Resolved(0)));
    }

    #[test]
    fn test_nested_pairs() {
        let mut pages = cache("[[]]");
        let mut table = JumpTable::new();
        table.extend(&mut pages).unwrap();

        assert_eq!(table.target(0), Some(JumpTarget::Resolved(4)));
        assert_eq!(table.target(1), Some(JumpTarget::Resolved(3)));
        assert_eq!(table.target(2), Some(JumpTarget::Resolved(2)));
        assert_eq!(table.target(3), Some(JumpTarget::Resolved(1)));
        assert_eq!(table.pending(), 0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_pivot_pair() {
        let mut pages = cache("||");
        let mut table = JumpTable::new();
        table.extend(&mut pages).unwrap();

        assert_eq!(table.target(0), Some(JumpTarget::Resolved(2)));
        assert_eq!(table.target(1), Some(JumpTarget::Resolved(1)));
    }

    #[test]
    fn test_pivot_closes_pending_loop() {
        let mut pages = cache("[|]");
        let mut table = JumpTable::new();
        table.extend(&mut pages).unwrap();

        assert_eq!(table.target(0), Some(JumpTarget::Resolved(2)));
        assert_eq!(table.target(1), Some(JumpTarget::Resolved(1)));
        assert_eq!(table.target(2), Some(JumpTarget::Resolved(0)));
    }

    #[test]
    fn test_match_across_pages() {
        let text = format!("{}[__]", "_".repeat(63));
        let mut pages = cache(&text);
        let mut table = JumpTable::new();

        assert_eq!(table.resolve(&mut pages, 63, false).unwrap(), 64);
        assert_eq!(table.frontier(), Some(0));
        assert_eq!(table.target(63), Some(JumpTarget::Unresolved));

        assert_eq!(table.resolve(&mut pages, 63, true).unwrap(), 67);
        assert_eq!(table.frontier(), Some(1));
        assert_eq!(table.target(66), Some(JumpTarget::Resolved(64)));
    }

    #[test]
    fn test_pages_are_scanned_once() {
        let mut pages = cache("[]");
        let mut table = JumpTable::new();

        table.resolve(&mut pages, 0, true).unwrap();
        table.resolve(&mut pages, 1, true).unwrap();
        table.resolve(&mut pages, 0, false).unwrap();
        assert_eq!(table.pages_scanned(), 1);
        assert_eq!(pages.generated(), 1);
    }

    #[test]
    fn test_lookup_extends_up_to_page() {
        let mut pages = cache("");
        let mut table = JumpTable::new();
        table.extend(&mut pages).unwrap();
        table.extend(&mut pages).unwrap();
        table.extend(&mut pages).unwrap();
        assert_eq!(table.frontier(), Some(2));
        assert!(table.is_empty());

        let err = table.resolve(&mut pages, 200, true).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingJumpEntry { index: 200 }));
        assert_eq!(table.frontier(), Some(3));
    }

    #[test]
    fn test_endless_scan_stops_at_page_limit() {
        let pages = assemble("[").unwrap();
        let mut pages = PageCache::new(FixedPages::new(pages), Some(3));
        let mut table = JumpTable::new();

        let err = table.resolve(&mut pages, 0, true).unwrap_err();
        assert!(matches!(err, RuntimeError::PageLimitExceeded { page: 4, limit: 3 }));
        assert_eq!(table.frontier(), Some(3));
        assert_eq!(table.target(0), Some(JumpTarget::Unresolved));
    }

    #[test]
    fn test_close_refuses_resolved_open_entry() {
        let mut pages = cache("+]");
        let mut table = JumpTable::new();
        // Open bracket at 0, already resolved elsewhere
        table.open.push(1);
        table.mapping.insert(0, JumpTarget::Resolved(5));

        let err = table.extend(&mut pages).unwrap_err();
        assert!(matches!(err, RuntimeError::JumpEntryOverwrite { index: 0 }));
        assert!(err.is_internal());
        assert_eq!(table.target(0), Some(JumpTarget::Resolved(5)));
        assert_eq!(table.frontier(), None);
    }

    #[test]
    fn test_close_refuses_open_without_entry() {
        let mut pages = cache("+]");
        let mut table = JumpTable::new();
        table.open.push(1);

        let err = table.extend(&mut pages).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingJumpEntry { index: 0 }));
        assert_eq!(err.exit_code(), crate::error::EXIT_INTERNAL);
        assert_eq!(table.frontier(), None);
    }
}
