//! Paged row storage.
//!
//! A table is a bounded list of page slots that grows on demand. Row `n`
//! lives on page `n / rows_per_page` at byte offset
//! `(n % rows_per_page) * ROW_SIZE`.
//! Pages are allocated the first time a row on them is addressed and are
//! only released when the whole table goes away.

use tracing::debug;

use crate::ROW_SIZE;
use crate::config::TableConfig;
use crate::row::Row;

type Page = Box<[u8]>;

#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    num_rows: usize,
    pages: Vec<Option<Page>>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            num_rows: 0,
            pages: Vec::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.num_rows
    }

    /// Total number of rows the table can ever hold.
    pub fn capacity(&self) -> usize {
        self.config.max_rows()
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= self.capacity()
    }

    /// Number of pages that have been materialized so far.
    pub fn page_count(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Page index and byte offset of `row_index`, or `None` past the last
    /// page the table may allocate.
    fn locate(&self, row_index: usize) -> Option<(usize, usize)> {
        let rows_per_page = self.config.rows_per_page();
        let page_index = row_index.checked_div(rows_per_page)?;
        if page_index >= self.config.max_pages {
            return None;
        }
        let offset = (row_index % rows_per_page) * ROW_SIZE;
        Some((page_index, offset))
    }

    /// Returns the writable slot for `row_index`, allocating its page on
    /// first use.
    ///
    /// Does not check against the row count. Returns `None` when the index
    /// falls past the last page the table may allocate.
    pub fn slot_for(&mut self, row_index: usize) -> Option<&mut [u8]> {
        let (page_index, offset) = self.locate(row_index)?;
        let page_size = self.config.page_size;
        if self.pages.len() <= page_index {
            self.pages.resize_with(page_index + 1, || None);
        }
        let page = self.pages[page_index].get_or_insert_with(|| {
            debug!(page_index, page_size, "allocating page");
            vec![0u8; page_size].into_boxed_slice()
        });
        Some(&mut page[offset..offset + ROW_SIZE])
    }

    /// Read-only counterpart of [`slot_for`](Self::slot_for); never
    /// allocates, so an unmaterialized page yields `None`.
    pub fn slot(&self, row_index: usize) -> Option<&[u8]> {
        let (page_index, offset) = self.locate(row_index)?;
        let page = self.pages.get(page_index)?.as_ref()?;
        Some(&page[offset..offset + ROW_SIZE])
    }

    /// Slot the next appended row will occupy. The row count is left alone
    /// until [`commit_append`](Self::commit_append).
    pub fn append_slot(&mut self) -> Option<&mut [u8]> {
        self.slot_for(self.num_rows)
    }

    pub fn commit_append(&mut self) {
        self.num_rows += 1;
    }

    /// Decoded rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.num_rows).filter_map(|index| self.slot(index).map(Row::decode))
    }

    /// Releases every page.
    pub fn close(self) {
        debug!(
            rows = self.num_rows,
            pages = self.page_count(),
            "closing table"
        );
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
