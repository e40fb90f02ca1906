//! Content entry input type.
//!
//! Entries are handed to the engine fully materialized by a content loader.
//! The engine only reads them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Order assigned to entries without an explicit `order`. Sorts last.
pub const DEFAULT_ORDER: u32 = 999;

/// A documentation entry: identifier plus frontmatter metadata.
///
/// The identifier is a path-like key such as `"fr/install/setup.mdx"` or
/// `"install/index.mdx"`, encoding an optional locale prefix, the section,
/// an optional subsection and the filename.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Path-like identifier (never empty).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Sort order, lower first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Short description used by prev/next links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ContentEntry {
    /// Create an entry without order or description.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order: None,
            description: None,
        }
    }

    /// Set the sort order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Effective order, falling back to [`DEFAULT_ORDER`].
    #[must_use]
    pub fn order_or_default(&self) -> u32 {
        self.order.unwrap_or(DEFAULT_ORDER)
    }
}

/// Compare two titles the way navigation lists are sorted.
///
/// Case-insensitive first so "apple" sits next to "Apple", then byte order
/// to keep the result total.
pub(crate) fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order ascending (missing = [`DEFAULT_ORDER`]), then title.
pub(crate) fn compare_order_then_title(
    a_order: Option<u32>,
    a_title: &str,
    b_order: Option<u32>,
    b_title: &str,
) -> Ordering {
    a_order
        .unwrap_or(DEFAULT_ORDER)
        .cmp(&b_order.unwrap_or(DEFAULT_ORDER))
        .then_with(|| compare_titles(a_title, b_title))
}
