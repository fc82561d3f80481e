//! Table geometry.
//!
//! Page size and page count are chosen once at startup and handed to
//! [`Table::new`](crate::Table::new); everything else is derived from them
//! and the fixed [`ROW_SIZE`].

use crate::error::ConfigError;
use crate::{PAGE_SIZE, ROW_SIZE, TABLE_MAX_PAGES};

/// Largest page a table will allocate.
pub const PAGE_SIZE_LIMIT: usize = 1 << 20;

/// Largest page count a table will accept.
pub const MAX_PAGES_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Size of one page in bytes.
    pub page_size: usize,

    /// Upper bound on the number of pages a table may materialize.
    pub max_pages: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_pages: TABLE_MAX_PAGES,
        }
    }
}

impl TableConfig {
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }

    /// Rows packed into one page, with no padding between them.
    pub fn rows_per_page(&self) -> usize {
        self.page_size / ROW_SIZE
    }

    /// Saturates for geometry that [`validate`](Self::validate) would reject.
    pub fn max_rows(&self) -> usize {
        self.rows_per_page().saturating_mul(self.max_pages)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size < ROW_SIZE {
            return Err(ConfigError::PageTooSmall {
                page_size: self.page_size,
                row_size: ROW_SIZE,
            });
        }
        if self.page_size > PAGE_SIZE_LIMIT {
            return Err(ConfigError::PageTooLarge {
                page_size: self.page_size,
                limit: PAGE_SIZE_LIMIT,
            });
        }
        if self.max_pages == 0 {
            return Err(ConfigError::NoPages);
        }
        if self.max_pages > MAX_PAGES_LIMIT {
            return Err(ConfigError::TooManyPages {
                max_pages: self.max_pages,
                limit: MAX_PAGES_LIMIT,
            });
        }
        self.rows_per_page()
            .checked_mul(self.max_pages)
            .ok_or(ConfigError::CapacityOverflow {
                rows_per_page: self.rows_per_page(),
                max_pages: self.max_pages,
            })?;
        Ok(())
    }
}

/// Builder for [`TableConfig`]
#[derive(Default)]
pub struct TableConfigBuilder {
    config: TableConfig,
}

impl TableConfigBuilder {
    /// Set the page size (in bytes)
    pub fn page_size(mut self, bytes: usize) -> Self {
        self.config.page_size = bytes;
        self
    }

    /// Set the maximum number of pages
    pub fn max_pages(mut self, count: usize) -> Self {
        self.config.max_pages = count;
        self
    }

    pub fn build(self) -> Result<TableConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
