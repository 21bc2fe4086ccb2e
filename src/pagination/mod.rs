//! Pagination module
//!
//! Computes which page numbers a pagination control shows.
//!
//! # Overview
//!
//! Given a total item count, a page size, a requested page and a window
//! size, [`PaginationBuilder::build`] derives a valid current page, the
//! window ("set") of page numbers around it, and whether windows exist on
//! either side. Windows are fixed-size blocks aligned to page 1, so with a
//! window of 10 page 47 always lands in `[41..50]`.
//!
//! Malformed input is never rejected: negative pages, zero page sizes and
//! oversized page requests are clamped to the nearest valid value.

mod builder;
mod types;

pub use builder::{PaginationBuilder, DEFAULT_LIST_SIZE, DEFAULT_PAGES_IN_SET};
pub use types::{PageWindow, Pagination};
