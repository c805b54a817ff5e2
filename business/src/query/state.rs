//! Immutable query state: what the user is currently searching, sorting and paging by.
//!
//! Every interaction consumes the current value and returns the next one; nothing
//! downstream holds on to a previously filtered result.

use super::filter::normalize_term;
use super::sort::{SortField, SortSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    sort: SortSpec,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortSpec::default(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized (lowercased, trimmed) search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Requested page; may exceed the page count until the pipeline clamps it.
    pub fn page(&self) -> usize {
        self.page
    }

    /// New search text; always returns to the first page.
    #[must_use]
    pub fn with_search(self, raw: &str) -> Self {
        Self {
            search: normalize_term(raw),
            page: 1,
            ..self
        }
    }

    #[must_use]
    pub fn with_sort(self, sort: SortSpec) -> Self {
        Self { sort, ..self }
    }

    /// Header click on `field`.
    #[must_use]
    pub fn with_sort_toggled(self, field: SortField) -> Self {
        let sort = self.sort.toggled(field);
        Self { sort, ..self }
    }

    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// Advances one page unless already on the last of `total_pages`.
    #[must_use]
    pub fn next_page(self, total_pages: usize) -> Self {
        let last = total_pages.max(1);
        let current = self.page.min(last);
        Self {
            page: (current + 1).min(last),
            ..self
        }
    }

    /// Goes back one page unless already on the first.
    #[must_use]
    pub fn previous_page(self, total_pages: usize) -> Self {
        let current = self.page.min(total_pages.max(1));
        Self {
            page: current.saturating_sub(1).max(1),
            ..self
        }
    }
}
