//! Navigation tree types.

use serde::{Deserialize, Serialize};

/// One navigable page, optionally with one level of child pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Canonical slug (e.g. `/docs/install/setup/`).
    pub slug: String,
    /// Sort order, lower first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Child pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a leaf item.
    #[must_use]
    pub fn new(title: impl Into<String>, slug: impl Into<String>, order: Option<u32>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            order,
            children: Vec::new(),
        }
    }
}

/// Top-level navigation group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionNavItem {
    /// Section header title.
    pub section_title: String,
    /// Slug of the section landing page.
    pub section_slug: String,
    /// Pages in the section.
    pub items: Vec<NavItem>,
    /// Sort order, lower first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Which part of the site a tree covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavScope {
    /// Every section.
    #[default]
    Full,
    /// A single section's items.
    Section,
}

/// Options for [`Navigator::build_tree`](crate::Navigator::build_tree).
#[derive(Clone, Debug, Default)]
pub struct BuildOptions<'a> {
    /// Tree scope.
    pub scope: NavScope,
    /// Section key, required for [`NavScope::Section`].
    pub section: Option<&'a str>,
    /// Locale filter; `None` selects default-locale entries.
    pub locale: Option<&'a str>,
}

/// Result of [`Navigator::build_tree`](crate::Navigator::build_tree).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavTree {
    /// Full tree.
    Sections(Vec<SectionNavItem>),
    /// Section-scoped tree.
    Items(Vec<NavItem>),
}

impl NavTree {
    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sections(sections) => sections.len(),
            Self::Items(items) => items.len(),
        }
    }

    /// Check if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sections of a full tree; empty for section-scoped trees.
    #[must_use]
    pub fn into_sections(self) -> Vec<SectionNavItem> {
        match self {
            Self::Sections(sections) => sections,
            Self::Items(_) => Vec::new(),
        }
    }

    /// Items of a section-scoped tree; empty for full trees.
    #[must_use]
    pub fn into_items(self) -> Vec<NavItem> {
        match self {
            Self::Sections(_) => Vec::new(),
            Self::Items(items) => items,
        }
    }
}
