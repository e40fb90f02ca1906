//! Sidebar preparation.
//!
//! Turns a full navigation tree into what the sidebar renders: slugs without
//! the active locale, no item repeating its section or a sibling, sections
//! in priority order.

use std::collections::HashSet;

use crate::settings::UNLISTED_PRIORITY;
use crate::{NavItem, Navigator, SectionNavItem};

/// Slugs and titles already claimed at one level of the sidebar.
#[derive(Default)]
struct Claimed {
    slugs: HashSet<String>,
    titles: HashSet<String>,
}

impl Claimed {
    /// Claim a slug/title pair. Returns `false` if either is already taken.
    fn claim(&mut self, slug: String, title: String) -> bool {
        if self.slugs.contains(&slug) || self.titles.contains(&title) {
            return false;
        }
        self.slugs.insert(slug);
        self.titles.insert(title);
        true
    }
}

fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

impl Navigator<'_> {
    /// Run display normalization, deduplication and priority sorting.
    #[must_use]
    pub fn prepare_for_display(
        &self,
        sections: Vec<SectionNavItem>,
        locale: Option<&str>,
    ) -> Vec<SectionNavItem> {
        let sections = self.normalize_for_display(sections, locale);
        let sections = self.filter_duplicate_items(sections, locale);
        self.sort_sections_by_priority(sections, locale)
    }

    /// Rewrite every section, item and child slug with [`display_slug`](Self::display_slug).
    #[must_use]
    pub fn normalize_for_display(
        &self,
        mut sections: Vec<SectionNavItem>,
        locale: Option<&str>,
    ) -> Vec<SectionNavItem> {
        for section in &mut sections {
            section.section_slug = self.display_slug(&section.section_slug, locale);
            for item in &mut section.items {
                item.slug = self.display_slug(&item.slug, locale);
                for child in &mut item.children {
                    child.slug = self.display_slug(&child.slug, locale);
                }
            }
        }
        sections
    }

    /// Drop items that repeat their section or an earlier sibling.
    ///
    /// Items are compared by normalized slug and by trimmed, lower-cased
    /// title; the first occurrence wins. Children are compared with their
    /// parent item, the section and earlier children. Sections left empty
    /// are dropped. The home section is passed through untouched.
    #[must_use]
    pub fn filter_duplicate_items(
        &self,
        sections: Vec<SectionNavItem>,
        locale: Option<&str>,
    ) -> Vec<SectionNavItem> {
        sections
            .into_iter()
            .filter_map(|mut section| {
                if self.is_home_section(&section, locale) {
                    return Some(section);
                }

                let section_slug = self.normalize_slug(&section.section_slug);
                let section_title = title_key(&section.section_title);
                let mut claimed = Claimed::default();
                claimed.claim(section_slug.clone(), section_title.clone());

                let items = std::mem::take(&mut section.items);
                for mut item in items {
                    let item_slug = self.normalize_slug(&item.slug);
                    let item_title = title_key(&item.title);
                    if !claimed.claim(item_slug.clone(), item_title.clone()) {
                        tracing::debug!(
                            slug = %item.slug,
                            section = %section.section_title,
                            "Dropping duplicate navigation item"
                        );
                        continue;
                    }

                    let mut claimed_children = Claimed::default();
                    claimed_children.claim(section_slug.clone(), section_title.clone());
                    claimed_children.claim(item_slug, item_title);
                    item.children.retain(|child| {
                        claimed_children.claim(self.normalize_slug(&child.slug), title_key(&child.title))
                    });
                    section.items.push(item);
                }

                if section.items.is_empty() {
                    tracing::debug!(section = %section.section_title, "Dropping empty section");
                    return None;
                }
                Some(section)
            })
            .collect()
    }

    /// Sort sections by the priority table: home first, unlisted sections
    /// last, ties broken by title.
    #[must_use]
    pub fn sort_sections_by_priority(
        &self,
        mut sections: Vec<SectionNavItem>,
        locale: Option<&str>,
    ) -> Vec<SectionNavItem> {
        sections.sort_by_cached_key(|section| {
            (
                !self.is_home_section(section, locale),
                self.section_priority(section, locale),
                section.section_title.to_lowercase(),
                section.section_title.clone(),
            )
        });
        sections
    }

    /// Check whether a renderer should skip an item that only repeats its section.
    #[must_use]
    pub fn should_skip_item(&self, item: &NavItem, section_slug: &str) -> bool {
        item.children.is_empty() && self.is_active_page(&item.slug, section_slug)
    }

    fn is_home_section(&self, section: &SectionNavItem, locale: Option<&str>) -> bool {
        section.section_slug == self.root_slug()
            || section.section_slug == self.locale_root_slug(locale)
    }

    fn section_priority(&self, section: &SectionNavItem, locale: Option<&str>) -> u32 {
        let displayed = self.display_slug(&section.section_slug, locale);
        self.remove_root_prefix(&displayed)
            .split('/')
            .find(|part| !part.is_empty())
            .map_or(UNLISTED_PRIORITY, |key| self.settings.priority_of(key))
    }
}
