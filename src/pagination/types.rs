//! Pagination types and traits
//!
//! Defines the read-only result surface shared by every page window.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Read access to a computed page window
///
/// Page numbers are 1-based. A window ("set") is a contiguous run of page
/// numbers that a presentation layer shows together between its « and »
/// controls.
pub trait Pagination {
    /// The (clamped) current page
    fn current_page(&self) -> u64;

    /// Total number of pages, never less than 1
    fn total_pages(&self) -> u64;

    /// Page numbers in the window containing the current page
    fn set_pages(&self) -> RangeInclusive<u64>;

    /// True if a window exists before this one
    fn has_previous_set(&self) -> bool;

    /// True if a window exists after this one
    fn has_next_set(&self) -> bool;

    /// First page in the window, or the current page if the window is empty
    fn first_page_in_set(&self) -> u64 {
        let pages = self.set_pages();
        if pages.is_empty() {
            self.current_page()
        } else {
            *pages.start()
        }
    }

    /// Last page in the window, or the current page if the window is empty
    fn last_page_in_set(&self) -> u64 {
        let pages = self.set_pages();
        if pages.is_empty() {
            self.current_page()
        } else {
            *pages.end()
        }
    }

    /// Page the « control should link to: the last page of the previous window
    fn previous_set_page(&self) -> Option<u64> {
        self.has_previous_set()
            .then(|| self.first_page_in_set().saturating_sub(1))
    }

    /// Page the » control should link to: the first page of the next window
    fn next_set_page(&self) -> Option<u64> {
        self.has_next_set()
            .then(|| self.last_page_in_set().saturating_add(1))
    }
}

/// An immutable, fully computed page window
///
/// Produced by [`PaginationBuilder::build`](super::PaginationBuilder::build).
/// Holds only scalars, so it can be shared freely between readers. The window
/// is kept as its bounds; its size is independent of the window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    current_page: u64,
    total_pages: u64,
    first_page_in_set: u64,
    last_page_in_set: u64,
    has_previous_set: bool,
    has_next_set: bool,
}

impl PageWindow {
    /// Compute the window from already sanitized inputs.
    ///
    /// `items_per_page` and `pages_per_window` must be at least 1.
    pub(crate) fn compute(
        total_items: u64,
        requested_page: u64,
        items_per_page: u64,
        pages_per_window: u64,
    ) -> Self {
        debug_assert!(items_per_page > 0 && pages_per_window > 0);

        // An empty listing still renders one (empty) page
        let total_pages = total_items.div_ceil(items_per_page).max(1);
        let current_page = requested_page.clamp(1, total_pages);

        // Windows are aligned to page 1: [1..W], [W+1..2W], ...
        let offset = (current_page - 1) / pages_per_window * pages_per_window;
        let first = offset + 1;
        let last = offset.saturating_add(pages_per_window).min(total_pages);

        Self {
            current_page,
            total_pages,
            first_page_in_set: first,
            last_page_in_set: last,
            has_previous_set: first > 1,
            has_next_set: last < total_pages,
        }
    }
}

impl Pagination for PageWindow {
    fn current_page(&self) -> u64 {
        self.current_page
    }

    fn total_pages(&self) -> u64 {
        self.total_pages
    }

    fn set_pages(&self) -> RangeInclusive<u64> {
        self.first_page_in_set..=self.last_page_in_set
    }

    fn first_page_in_set(&self) -> u64 {
        self.first_page_in_set
    }

    fn last_page_in_set(&self) -> u64 {
        self.last_page_in_set
    }

    fn has_previous_set(&self) -> bool {
        self.has_previous_set
    }

    fn has_next_set(&self) -> bool {
        self.has_next_set
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {}/{}, set [{}..{}]",
            self.current_page,
            self.total_pages,
            self.first_page_in_set,
            self.last_page_in_set
        )?;
        if self.has_previous_set {
            f.write_str(", prev")?;
        }
        if self.has_next_set {
            f.write_str(", next")?;
        }
        Ok(())
    }
}
