//! Pagination options loaded from YAML or JSON
//!
//! Mirrors the builder's four inputs so a page window can be described in a
//! file:
//!
//! ```yaml
//! current_page: 3
//! total_items_count: 120
//! items_list_size: 20
//! pages_count_in_set: 5
//! ```
//!
//! Values are kept raw; clamping happens in [`PaginationBuilder`].

use crate::error::{Error, Result};
use crate::pagination::{PaginationBuilder, DEFAULT_LIST_SIZE, DEFAULT_PAGES_IN_SET};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Options
// ============================================================================

/// Raw pagination inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationOptions {
    /// Requested page (1-based)
    pub current_page: i64,

    /// Total number of items in the listing
    pub total_items_count: i64,

    /// Items shown on one page
    pub items_list_size: i64,

    /// Page numbers shown in one window
    pub pages_count_in_set: i64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_items_count: 0,
            items_list_size: DEFAULT_LIST_SIZE as i64,
            pages_count_in_set: DEFAULT_PAGES_IN_SET as i64,
        }
    }
}

/// Per-field overrides applied on top of [`PaginationOptions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub current_page: Option<i64>,
    pub total_items_count: Option<i64>,
    pub items_list_size: Option<i64>,
    pub pages_count_in_set: Option<i64>,
}

impl PaginationOptions {
    /// Replace every field that has an override
    pub fn merge(mut self, overrides: OptionOverrides) -> Self {
        if let Some(v) = overrides.current_page {
            self.current_page = v;
        }
        if let Some(v) = overrides.total_items_count {
            self.total_items_count = v;
        }
        if let Some(v) = overrides.items_list_size {
            self.items_list_size = v;
        }
        if let Some(v) = overrides.pages_count_in_set {
            self.pages_count_in_set = v;
        }
        self
    }

    /// Create a builder configured with these options
    pub fn builder(&self) -> PaginationBuilder {
        PaginationBuilder::from(self)
    }
}

impl From<&PaginationOptions> for PaginationBuilder {
    fn from(options: &PaginationOptions) -> Self {
        let mut builder = PaginationBuilder::new();
        builder
            .set_current_page_number(options.current_page)
            .set_total_items_count(options.total_items_count)
            .set_items_list_size(options.items_list_size)
            .set_pages_count_in_set(options.pages_count_in_set);
        builder
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load options from a file
///
/// `.json` files are parsed as JSON; anything else is parsed as YAML.
pub fn load_options(path: impl AsRef<Path>) -> Result<PaginationOptions> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(path = %path.display(), is_json, "Loading pagination options");

    if is_json {
        load_options_from_json(&content)
    } else {
        load_options_from_str(&content)
    }
}

/// Load options from a YAML string
pub fn load_options_from_str(yaml: &str) -> Result<PaginationOptions> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(PaginationOptions::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load options from a JSON string
pub fn load_options_from_json(json: &str) -> Result<PaginationOptions> {
    Ok(serde_json::from_str(json)?)
}
