//! # page-window
//!
//! Deterministic page-window computation for pagination controls.
//!
//! Given a total item count, a page size, a requested page and a window
//! size, the crate derives a valid current page, the page numbers to show
//! and whether windows exist on either side. Bad input is clamped, never
//! rejected, so rendering code needs no error handling around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_window::pagination::{Pagination, PaginationBuilder};
//!
//! let window = PaginationBuilder::new()
//!     .set_current_page_number(47)
//!     .set_items_list_size(1)
//!     .set_total_items_count(100)
//!     .set_pages_count_in_set(10)
//!     .build();
//!
//! assert_eq!(window.first_page_in_set(), 41);
//! assert_eq!(window.last_page_in_set(), 50);
//! assert_eq!(window.previous_set_page(), Some(40));
//! assert_eq!(window.next_set_page(), Some(51));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   options   ┌───────────────────┐  build()  ┌────────────┐
//! │ config (YAML │ ──────────▶ │ PaginationBuilder │ ────────▶ │ PageWindow │
//! │   / JSON)    │             │   (clamps input)  │           │ (immutable)│
//! └──────────────┘             └───────────────────┘           └────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(missing_docs)] // TODO: Document error variants and CLI fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Page window computation
pub mod pagination;

/// Options loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_options, load_options_from_str, PaginationOptions};
pub use error::{Error, Result};
pub use pagination::{PageWindow, Pagination, PaginationBuilder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
