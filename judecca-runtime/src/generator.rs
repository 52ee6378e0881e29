//! Page generators
//!
//! A generator maps a page index to 32 raw bytes. It must be a pure function
//! of the index: the cache in front of it may ask for the same page again at
//! any time.

use judecca_spec::{generate_page, RawPage, Seed, PAGE_BYTES};

pub trait PageGenerator {
    fn generate(&self, page_index: u64) -> RawPage;
}

/// Pages derived from the hashed source
#[derive(Debug, Clone, Copy)]
pub struct HashPages<'src> {
    source: &'src [u8],
    seed: Seed,
}

impl<'src> HashPages<'src> {
    pub fn new(source: &'src [u8], seed: Seed) -> Self {
        HashPages { source, seed }
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }
}

impl PageGenerator for HashPages<'_> {
    fn generate(&self, page_index: u64) -> RawPage {
        generate_page(self.source, &self.seed, page_index)
    }
}

/// A fixed list of pages followed by an endless run of filler pages
///
/// Used to drive the machine with hand-written instruction streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPages {
    pages: Vec<RawPage>,
    filler: RawPage,
}

impl FixedPages {
    /// Filler made of reserved no-ops (0xB)
    pub const NOP_FILLER: RawPage = [0xBB; PAGE_BYTES];

    pub fn new(pages: Vec<RawPage>) -> Self {
        FixedPages {
            pages,
            filler: Self::NOP_FILLER,
        }
    }

    /// Replace the page served past the end of the list
    pub fn with_filler(mut self, filler: RawPage) -> Self {
        self.filler = filler;
        self
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageGenerator for FixedPages {
    fn generate(&self, page_index: u64) -> RawPage {
        usize::try_from(page_index)
            .ok()
            .and_then(|index| self.pages.get(index))
            .copied()
            .unwrap_or(self.filler)
    }
}
