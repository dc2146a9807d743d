use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the registry; sections capture a clone at construction.
pub(crate) type SharedToc = Rc<RefCell<TableOfContents>>;

#[derive(Clone, Debug, PartialEq)]
pub struct TocEntry {
    pub title: String,
    pub number: u32,
    /// Nesting depth: 0 for chapters, 1 for subchapters.
    pub level: u32,
    /// Zero-based page index where the section's heading starts.
    pub page: usize,
}

/// Sink for section entries. Generation is strictly sequential and
/// depth-first, so insertion order equals document order.
#[derive(Debug, Default)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub(crate) fn add(&mut self, title: &str, number: u32, level: u32, page: usize) {
        self.entries.push(TocEntry {
            title: title.to_string(),
            number,
            level,
            page,
        });
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
