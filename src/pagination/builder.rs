//! Pagination builder
//!
//! Accumulates the four pagination inputs, clamping each one as it is set.

use super::types::PageWindow;
use tracing::{debug, trace};

/// Default number of items shown on one page
pub const DEFAULT_LIST_SIZE: u64 = 10;

/// Default number of page numbers shown in one window
pub const DEFAULT_PAGES_IN_SET: u64 = 10;

/// Builder for [`PageWindow`]
///
/// Every setter accepts raw (possibly negative) input and stores the nearest
/// valid value, so [`build`](Self::build) never fails. The builder is
/// reusable: each `build` reflects the inputs at that moment.
///
/// ```
/// use page_window::pagination::{Pagination, PaginationBuilder};
///
/// let window = PaginationBuilder::new()
///     .set_current_page_number(3)
///     .set_items_list_size(2)
///     .set_total_items_count(12)
///     .set_pages_count_in_set(2)
///     .build();
///
/// assert_eq!(window.set_pages(), 3..=4);
/// assert!(window.has_previous_set());
/// assert!(window.has_next_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBuilder {
    items_list_size: u64,
    pages_count_in_set: u64,
    total_items_count: u64,
    current_page_number: u64,
}

impl Default for PaginationBuilder {
    fn default() -> Self {
        Self {
            items_list_size: DEFAULT_LIST_SIZE,
            pages_count_in_set: DEFAULT_PAGES_IN_SET,
            total_items_count: 0,
            current_page_number: 1,
        }
    }
}

impl PaginationBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page; values below 1 become 1
    pub fn set_current_page_number(&mut self, page: i64) -> &mut Self {
        self.current_page_number = at_least("current_page_number", page, 1);
        self
    }

    /// Set the total number of items; negative values become 0
    pub fn set_total_items_count(&mut self, count: i64) -> &mut Self {
        self.total_items_count = at_least("total_items_count", count, 0);
        self
    }

    /// Set the number of items per page; values below 1 become 1
    pub fn set_items_list_size(&mut self, size: i64) -> &mut Self {
        self.items_list_size = at_least("items_list_size", size, 1);
        self
    }

    /// Set the number of page numbers per window; values below 1 become 1
    pub fn set_pages_count_in_set(&mut self, size: i64) -> &mut Self {
        self.pages_count_in_set = at_least("pages_count_in_set", size, 1);
        self
    }

    pub fn current_page_number(&self) -> u64 {
        self.current_page_number
    }

    pub fn total_items_count(&self) -> u64 {
        self.total_items_count
    }

    pub fn items_list_size(&self) -> u64 {
        self.items_list_size
    }

    pub fn pages_count_in_set(&self) -> u64 {
        self.pages_count_in_set
    }

    /// Compute a new [`PageWindow`] from the current settings
    pub fn build(&self) -> PageWindow {
        let window = PageWindow::compute(
            self.total_items_count,
            self.current_page_number,
            self.items_list_size,
            self.pages_count_in_set,
        );
        debug!(
            total_items = self.total_items_count,
            requested_page = self.current_page_number,
            items_list_size = self.items_list_size,
            pages_count_in_set = self.pages_count_in_set,
            "Built page window: {window}"
        );
        window
    }
}

/// Clamp a raw input to `floor`, logging when it had to be corrected
fn at_least(field: &'static str, value: i64, floor: u64) -> u64 {
    match u64::try_from(value) {
        Ok(v) if v >= floor => v,
        _ => {
            trace!(field, value, floor, "Clamped pagination input");
            floor
        }
    }
}
