//! Queries for consumers outside the sidebar: the search index and
//! per-page generators.

use std::collections::HashMap;

use serde::Serialize;

use crate::{ContentEntry, Navigator};

/// One document in the search index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    /// Content identifier of the entry.
    pub id: String,
    /// Canonical page slug.
    pub slug: String,
    /// Link target of the result, the page slug.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Page description, if the entry has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Title of the navigation section listing the page.
    pub section: Option<String>,
}

/// Route parameters of a generated per-page asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRoute {
    /// Root-relative path without surrounding slashes (`fr/install/setup`).
    pub slug: String,
    /// Locale code, the default locale for unprefixed entries.
    pub locale: String,
    /// Section key of the page, `None` when the locale predicate hides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Navigator<'_> {
    /// Build search records for every entry, in entry order.
    #[must_use]
    pub fn search_records(&self, entries: &[ContentEntry]) -> Vec<SearchRecord> {
        let sections = self.section_titles_by_slug(entries);

        entries
            .iter()
            .map(|entry| {
                let slug = self.page_slug(entry);
                SearchRecord {
                    id: entry.id.clone(),
                    url: slug.clone(),
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                    section: sections.get(&slug).cloned(),
                    slug,
                }
            })
            .collect()
    }

    /// Route parameters for every page except the locale roots.
    #[must_use]
    pub fn page_routes(&self, entries: &[ContentEntry]) -> Vec<PageRoute> {
        let root = self.root_slug();

        entries
            .iter()
            .filter_map(|entry| {
                let slug = self.page_slug(entry);
                if self.normalize_slug(&slug) == root {
                    return None;
                }
                let path = self.remove_root_prefix(&slug).trim_matches('/');
                let locale = self
                    .split_identifier(&entry.id)
                    .0
                    .unwrap_or(self.settings.default_locale.as_str());
                Some(PageRoute {
                    slug: path.to_owned(),
                    locale: locale.to_owned(),
                    section: self.section_from_slug(&slug),
                })
            })
            .collect()
    }

    /// Page slug → section title, over the full tree of every locale present.
    fn section_titles_by_slug(&self, entries: &[ContentEntry]) -> HashMap<String, String> {
        let mut locales: Vec<Option<&str>> = Vec::new();
        for entry in entries {
            let locale = self.split_identifier(&entry.id).0;
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }

        let mut titles = HashMap::new();
        for locale in locales {
            for section in self.build_full_tree(entries, locale) {
                let pages = section
                    .items
                    .iter()
                    .flat_map(|item| std::iter::once(item).chain(&item.children));
                for page in pages {
                    titles
                        .entry(page.slug.clone())
                        .or_insert_with(|| section.section_title.clone());
                }
            }
        }
        titles
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{NavSettings, SlugCache};

    fn entries() -> Vec<ContentEntry> {
        vec![
            ContentEntry::new("home", "Home"),
            ContentEntry::new("install/index.mdx", "Install").with_order(1),
            ContentEntry::new("install/setup.mdx", "Setup").with_description("Prepare"),
            ContentEntry::new("install/advanced/index.mdx", "Advanced"),
            ContentEntry::new("install/advanced/tweaks.mdx", "Tweaks"),
            ContentEntry::new("fr/install/index.mdx", "Installation"),
            ContentEntry::new("fr/install/setup.mdx", "Configuration"),
        ]
    }

    #[test]
    fn test_search_records() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let records = nav.search_records(&entries());

        assert_eq!(records.len(), 7);
        assert_eq!(
            records[2],
            SearchRecord {
                id: "install/setup.mdx".to_owned(),
                slug: "/docs/install/setup/".to_owned(),
                url: "/docs/install/setup/".to_owned(),
                title: "Setup".to_owned(),
                description: Some("Prepare".to_owned()),
                section: Some("Install".to_owned()),
            }
        );
    }

    #[test]
    fn test_search_records_sections() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let records = nav.search_records(&entries());
        let titles: Vec<Option<&str>> = records
            .iter()
            .map(|record| record.section.as_deref())
            .collect();

        assert_eq!(
            titles,
            vec![
                Some("Home"),
                // The section index is not listed as an item.
                None,
                Some("Install"),
                Some("Install"),
                Some("Install"),
                None,
                Some("Installation"),
            ]
        );
    }

    #[test]
    fn test_page_routes() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let routes = nav.page_routes(&entries());
        let slugs: Vec<(&str, &str)> = routes
            .iter()
            .map(|route| (route.slug.as_str(), route.locale.as_str()))
            .collect();

        assert_eq!(
            slugs,
            vec![
                ("install", "en"),
                ("install/setup", "en"),
                ("install/advanced", "en"),
                ("install/advanced/tweaks", "en"),
                ("fr/install", "fr"),
                ("fr/install/setup", "fr"),
            ]
        );
        assert_eq!(routes[1].section.as_deref(), Some("install"));
        assert_eq!(routes[5].section.as_deref(), Some("install"));
    }

    #[test]
    fn test_page_routes_skip_locale_roots() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            ContentEntry::new("index.mdx", "Home"),
            ContentEntry::new("fr/index.mdx", "Accueil"),
        ];

        assert!(nav.page_routes(&entries).is_empty());
    }
}
