//! Prev/next page lookup.
//!
//! The reading order is the full tree in sidebar priority order, flattened
//! depth-first: each item, then its children.

use std::collections::HashMap;

use serde::Serialize;

use crate::{ContentEntry, NavItem, Navigator, SectionNavItem};

/// Link to a neighbouring page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageNavLink {
    /// Canonical slug of the page.
    pub href: String,
    /// Page title.
    pub title: String,
    /// Page description, if the entry has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Neighbours of a page in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdjacentPages {
    /// Page before the current one.
    pub prev: Option<PageNavLink>,
    /// Page after the current one.
    pub next: Option<PageNavLink>,
}

/// Flatten sections into reading order: every item followed by its children.
#[must_use]
pub fn flatten_tree(sections: &[SectionNavItem]) -> Vec<&NavItem> {
    sections
        .iter()
        .flat_map(|section| &section.items)
        .flat_map(|item| std::iter::once(item).chain(&item.children))
        .collect()
}

impl Navigator<'_> {
    /// Find the pages before and after `current_slug` in reading order.
    ///
    /// Slugs are matched after normalization, so a locale-framed slug finds
    /// its page. Returns neither neighbour when the slug is unknown.
    #[must_use]
    pub fn adjacent_pages(
        &self,
        entries: &[ContentEntry],
        current_slug: &str,
        locale: Option<&str>,
    ) -> AdjacentPages {
        let tree = self.sort_sections_by_priority(self.build_full_tree(entries, locale), locale);
        let pages = flatten_tree(&tree);

        let current = self.normalize_slug(current_slug);
        let Some(position) = pages
            .iter()
            .position(|page| self.normalize_slug(&page.slug) == current)
        else {
            return AdjacentPages::default();
        };

        let descriptions = self.descriptions(entries);
        let link = |page: &&NavItem| PageNavLink {
            href: page.slug.clone(),
            title: page.title.clone(),
            description: descriptions
                .get(&self.normalize_slug(&page.slug))
                .copied()
                .flatten()
                .map(str::to_owned),
        };

        AdjacentPages {
            prev: position
                .checked_sub(1)
                .and_then(|index| pages.get(index))
                .map(link),
            next: pages.get(position + 1).map(link),
        }
    }

    /// Normalized page slug → description of the first entry with that slug,
    /// across every locale.
    fn descriptions<'e>(&self, entries: &'e [ContentEntry]) -> HashMap<String, Option<&'e str>> {
        let mut descriptions = HashMap::new();
        for entry in entries {
            descriptions
                .entry(self.normalize_slug(&self.page_slug(entry)))
                .or_insert(entry.description.as_deref());
        }
        descriptions
    }
}
