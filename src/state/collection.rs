//! Shared core for the remote list pages.
//!
//! DESIGN
//! ======
//! Incidents, evidence, audits, and reports all render the same way: fetch
//! the whole collection, filter it client-side with a substring search,
//! and paginate the result three rows at a time. Instead of four copies of
//! that logic, each page owns one [`Collection`] bundle and derives its
//! visible rows through the pure functions below, supplying only a
//! field-extraction function for search.
//!
//! The signal bundle stays thin; everything with behavior worth pinning
//! down lives in plain functions so it can be unit-tested off-browser.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use leptos::prelude::*;

/// Rows shown per table page. Fixed; the UI offers no page-size control.
pub const PAGE_SIZE: usize = 3;

/// Reactive state for one remote collection page.
pub struct Collection<T: Send + Sync + 'static> {
    /// Last successfully fetched rows, unfiltered.
    pub items: RwSignal<Vec<T>>,
    /// True from mount and during every refetch.
    pub loading: RwSignal<bool>,
    /// Fetch failure, already user-presentable.
    pub error: RwSignal<Option<String>>,
    /// Live search term; applied per keystroke.
    pub search: RwSignal<String>,
    /// Current page, 1-based.
    pub page: RwSignal<usize>,
    /// Bump counter; the page's fetch effect subscribes to it.
    reload: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Copy for Collection<T> {}

impl<T: Send + Sync + 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            reload: RwSignal::new(0),
        }
    }

    /// Subscribe the calling effect to reload requests.
    pub fn track_reload(&self) {
        self.reload.track();
    }

    /// Ask the page's fetch effect to run again.
    pub fn request_reload(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    /// Mark a fetch as started.
    pub fn begin_load(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// Store a fetch outcome and leave the loading state.
    pub fn resolve(&self, result: Result<Vec<T>, String>) {
        match result {
            Ok(rows) => {
                self.items.set(rows);
                self.error.set(None);
            }
            Err(message) => self.error.set(Some(message)),
        }
        self.loading.set(false);
    }

    /// Replace the search term. Always returns to the first page so a
    /// narrower result set can never leave the view stranded past its
    /// last page.
    pub fn set_search(&self, term: String) {
        self.search.set(term);
        self.page.set(1);
    }

    /// Jump to `page`, clamped against the current page count.
    pub fn go_to_page(&self, page: usize, total: usize) {
        self.page.set(clamp_page(page, total));
    }
}

/// Case-insensitive substring match over a row's searchable fields.
/// An empty or whitespace-only term matches every row.
pub fn matches_search(fields: &[String], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Filter rows by the search term, with `fields` supplying each row's
/// searchable strings.
pub fn filter_rows<T: Clone>(
    rows: &[T],
    term: &str,
    fields: impl Fn(&T) -> Vec<String>,
) -> Vec<T> {
    rows.iter()
        .filter(|row| matches_search(&fields(row), term))
        .cloned()
        .collect()
}

/// Number of pages needed for `row_count` rows; zero rows need zero pages.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size)
}

/// Clamp a 1-based page index into `1..=total`, treating an empty
/// collection as a single page.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The rows visible on `page`. An out-of-range page yields the nearest
/// valid page's rows rather than an empty slice.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, total_pages(rows.len(), page_size));
    rows.iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
