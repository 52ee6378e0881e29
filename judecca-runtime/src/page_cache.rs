//! Single-slot page cache
//!
//! Execution is overwhelmingly local, so holding one decoded page is enough.
//! A miss regenerates the page from scratch; generation is pure.

use crate::error::{Result, RuntimeError};
use crate::generator::PageGenerator;
use judecca_spec::{decode_page, offset_of, page_of, Opcode, Page, MAX_ADDRESSABLE_PAGE, PAGE_SIZE};
use tracing::debug;

pub struct PageCache<G> {
    generator: G,
    max_page: Option<u64>,
    index: Option<u64>,
    page: Page,
    generated: u64,
}

impl<G: PageGenerator> PageCache<G> {
    /// Wrap `generator`. Pages above `max_page` are refused.
    pub fn new(generator: G, max_page: Option<u64>) -> Self {
        PageCache {
            generator,
            max_page,
            index: None,
            page: [Opcode::Nop; PAGE_SIZE],
            generated: 0,
        }
    }

    /// Decoded page `page_index`, generating it on a miss
    pub fn page(&mut self, page_index: u64) -> Result<&Page> {
        if self.index != Some(page_index) {
            self.check_bounds(page_index)?;
            let raw = self.generator.generate(page_index);
            self.page = decode_page(&raw);
            self.index = Some(page_index);
            self.generated += 1;
            debug!(page = page_index, "page cache miss");
        }
        Ok(&self.page)
    }

    /// Opcode at instruction index `ip`
    pub fn opcode(&mut self, ip: u64) -> Result<Opcode> {
        let page = self.page(page_of(ip))?;
        Ok(page[offset_of(ip)])
    }

    fn check_bounds(&self, page_index: u64) -> Result<()> {
        let limit = match self.max_page {
            Some(max_page) => max_page.min(MAX_ADDRESSABLE_PAGE),
            None => MAX_ADDRESSABLE_PAGE,
        };
        if page_index > limit {
            return Err(RuntimeError::PageLimitExceeded { page: page_index, limit });
        }
        Ok(())
    }

    /// Pages generated so far, counting regenerations
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Index of the page currently held
    pub fn cached_index(&self) -> Option<u64> {
        self.index
    }

    pub fn max_page(&self) -> Option<u64> {
        self.max_page
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}
