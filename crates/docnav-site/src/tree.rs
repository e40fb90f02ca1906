//! Navigation tree building.
//!
//! Entries are grouped by their locale-relative path:
//!
//! ```text
//! [locale/]section/subsection/.../file.mdx
//! ```
//!
//! - The entry without a path separator (or a locale's `index` file) is the
//!   home page and becomes its own section, always first.
//! - Every other first segment is a section. The section's own index
//!   supplies its title, slug and order and is not listed as an item unless
//!   it is the only entry.
//! - Second segments are subsections. A subsection's index becomes a nav
//!   item whose children are the remaining entries; without an index those
//!   entries are promoted into the section's item list.
//!
//! What counts as a group's index is decided in one place,
//! [`represents_group`]: a path ending directly in the group (a single
//! document `install.mdx` or a bare identifier `en/install`) or in its
//! `index` file.

use std::collections::HashMap;

use crate::entry::{DEFAULT_ORDER, compare_order_then_title};
use crate::settings::FALLBACK_TITLE;
use crate::slug::{is_index_segment, strip_extension};
use crate::{BuildOptions, ContentEntry, NavItem, NavScope, NavTree, Navigator, SectionNavItem};

/// An entry with its identifier split into locale and path segments.
struct Located<'e> {
    entry: &'e ContentEntry,
    locale: Option<&'e str>,
    segments: Vec<&'e str>,
}

impl<'e> Located<'e> {
    fn section_key(&self) -> Option<&'e str> {
        self.segments.first().copied().map(strip_extension)
    }

    /// Home page: an identifier without separator, or a locale's index.
    fn is_home(&self) -> bool {
        !self.entry.id.contains('/') || represents_group(&self.segments)
    }

    /// Path segments below the given depth.
    fn below(&self, depth: usize) -> &[&'e str] {
        self.segments.get(depth..).unwrap_or_default()
    }
}

/// Check whether the path remaining below a group names the group itself.
fn represents_group(rest: &[&str]) -> bool {
    match rest {
        [] => true,
        [only] => is_index_segment(only),
        _ => false,
    }
}

/// Group values by key, keeping first-seen key order.
fn group_in_order<'k, T>(pairs: impl IntoIterator<Item = (&'k str, T)>) -> Vec<(&'k str, Vec<T>)> {
    let mut positions: HashMap<&'k str, usize> = HashMap::new();
    let mut groups: Vec<(&'k str, Vec<T>)> = Vec::new();
    for (key, value) in pairs {
        if let Some(&position) = positions.get(key) {
            groups[position].1.push(value);
        } else {
            positions.insert(key, groups.len());
            groups.push((key, vec![value]));
        }
    }
    groups
}

/// Default section title: hyphens to spaces, first letter capitalized.
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sort_items(items: &mut [NavItem]) {
    items.sort_by(|a, b| compare_order_then_title(a.order, &a.title, b.order, &b.title));
}

impl Navigator<'_> {
    /// Build a full or section-scoped navigation tree.
    ///
    /// Section scope without a section yields an empty tree.
    #[must_use]
    pub fn build_tree(&self, entries: &[ContentEntry], options: &BuildOptions<'_>) -> NavTree {
        match options.scope {
            NavScope::Full => NavTree::Sections(self.build_full_tree(entries, options.locale)),
            NavScope::Section => NavTree::Items(
                options
                    .section
                    .map(|section| self.build_section_tree(entries, section, options.locale))
                    .unwrap_or_default(),
            ),
        }
    }

    /// Build the navigation tree of every section for a locale.
    ///
    /// The home section comes first regardless of its order; the remaining
    /// sections are sorted by order, then title.
    #[must_use]
    pub fn build_full_tree(
        &self,
        entries: &[ContentEntry],
        locale: Option<&str>,
    ) -> Vec<SectionNavItem> {
        let target = self.target_locale(locale);
        let mut home: Option<Located<'_>> = None;
        let mut grouped = Vec::new();

        for located in self.locate_all(entries, target) {
            if located.is_home() {
                if let Some(replaced) = home.replace(located) {
                    tracing::debug!(id = %replaced.entry.id, "Replacing home entry");
                }
                continue;
            }
            if let Some(key) = located.section_key() {
                grouped.push((key, located));
            }
        }

        let mut sections: Vec<SectionNavItem> = group_in_order(grouped)
            .into_iter()
            .filter_map(|(key, members)| self.section_nav_item(key, &members, target))
            .collect();
        sections.sort_by(|a, b| {
            compare_order_then_title(a.order, &a.section_title, b.order, &b.section_title)
        });

        if let Some(home) = home {
            sections.insert(0, self.home_section(home.entry, target));
        }
        sections
    }

    /// Build the items of a single section for a locale.
    #[must_use]
    pub fn build_section_tree(
        &self,
        entries: &[ContentEntry],
        section: &str,
        locale: Option<&str>,
    ) -> Vec<NavItem> {
        let target = self.target_locale(locale);
        let members: Vec<Located<'_>> = self
            .locate_all(entries, target)
            .into_iter()
            .filter(|located| !located.is_home() && located.section_key() == Some(section))
            .collect();
        self.section_items(&members)
    }

    /// Title of the page at `slug`, or `"Documentation"` when none matches.
    #[must_use]
    pub fn page_title(&self, entries: &[ContentEntry], slug: &str) -> String {
        let wanted = self.normalize_slug(slug);
        entries
            .iter()
            .find(|entry| self.normalize_slug(&self.page_slug(entry)) == wanted)
            .map_or_else(|| FALLBACK_TITLE.to_owned(), |entry| entry.title.clone())
    }

    /// Slug an entry is listed under in navigation trees.
    ///
    /// Same as [`resolve_slug`](Self::resolve_slug) except for home entries,
    /// which always sit at their locale's root.
    #[must_use]
    pub fn page_slug(&self, entry: &ContentEntry) -> String {
        let located = self.locate(entry);
        if located.is_home() {
            self.locale_root_slug(located.locale)
        } else {
            self.resolve_slug(&entry.id)
        }
    }

    fn locate<'e>(&self, entry: &'e ContentEntry) -> Located<'e> {
        let (locale, rest) = self.split_identifier(&entry.id);
        Located {
            entry,
            locale,
            segments: rest.split('/').filter(|part| !part.is_empty()).collect(),
        }
    }

    fn locate_all<'e>(&self, entries: &'e [ContentEntry], target: Option<&str>) -> Vec<Located<'e>> {
        entries
            .iter()
            .map(|entry| self.locate(entry))
            .filter(|located| located.locale == target)
            .collect()
    }

    fn home_section(&self, entry: &ContentEntry, target: Option<&str>) -> SectionNavItem {
        let slug = self.locale_root_slug(target);
        let order = entry.order.unwrap_or(0);
        SectionNavItem {
            section_title: entry.title.clone(),
            section_slug: slug.clone(),
            items: vec![NavItem::new(entry.title.clone(), slug, Some(order))],
            order: Some(order),
        }
    }

    fn section_nav_item(
        &self,
        key: &str,
        members: &[Located<'_>],
        target: Option<&str>,
    ) -> Option<SectionNavItem> {
        let items = self.section_items(members);
        if items.is_empty() {
            return None;
        }

        let index = members
            .iter()
            .find(|member| represents_group(member.below(1)));
        let (mut title, slug, order) = match index {
            Some(index) => (
                index.entry.title.clone(),
                self.resolve_slug(&index.entry.id),
                index.entry.order_or_default(),
            ),
            None => (
                humanize_key(key),
                self.compose_slug(target, &[key]),
                items.first().and_then(|item| item.order).unwrap_or(DEFAULT_ORDER),
            ),
        };
        if let Some(forced) = self.settings.section_titles.get(key) {
            title.clone_from(forced);
        }

        Some(SectionNavItem {
            section_title: title,
            section_slug: slug,
            items,
            order: Some(order),
        })
    }

    fn section_items(&self, members: &[Located<'_>]) -> Vec<NavItem> {
        let mut index: Option<&Located<'_>> = None;
        let mut grouped = Vec::new();

        for member in members {
            let rest = member.below(1);
            if represents_group(rest) {
                if index.is_none() {
                    index = Some(member);
                } else {
                    tracing::debug!(id = %member.entry.id, "Ignoring duplicate section index");
                }
                continue;
            }
            if let Some(first) = rest.first() {
                grouped.push((strip_extension(first), member));
            }
        }

        if grouped.is_empty() {
            return index
                .map(|index| vec![self.leaf(index.entry)])
                .unwrap_or_default();
        }

        let mut items = Vec::new();
        for (_, mut group) in group_in_order(grouped) {
            group.sort_by(|a, b| {
                compare_order_then_title(a.entry.order, &a.entry.title, b.entry.order, &b.entry.title)
            });

            let mut subsection_index: Option<&Located<'_>> = None;
            let mut children = Vec::new();
            for member in group {
                if !represents_group(member.below(2)) {
                    children.push(self.leaf(member.entry));
                } else if subsection_index.is_none() {
                    subsection_index = Some(member);
                } else {
                    tracing::debug!(id = %member.entry.id, "Ignoring duplicate subsection index");
                }
            }

            match subsection_index {
                Some(subsection_index) => {
                    let mut item = self.leaf(subsection_index.entry);
                    item.children = children;
                    items.push(item);
                }
                None => items.extend(children),
            }
        }

        sort_items(&mut items);
        items
    }

    fn leaf(&self, entry: &ContentEntry) -> NavItem {
        NavItem::new(
            entry.title.clone(),
            self.resolve_slug(&entry.id),
            Some(entry.order_or_default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{NavSettings, SlugCache};

    fn entry(id: &str, title: &str, order: Option<u32>) -> ContentEntry {
        ContentEntry {
            id: id.to_owned(),
            title: title.to_owned(),
            order,
            description: None,
        }
    }

    fn titles(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    fn section_titles(sections: &[SectionNavItem]) -> Vec<&str> {
        sections
            .iter()
            .map(|section| section.section_title.as_str())
            .collect()
    }

    #[test]
    fn test_represents_group() {
        assert!(represents_group(&[]));
        assert!(represents_group(&["index.mdx"]));
        assert!(!represents_group(&["setup.mdx"]));
        assert!(!represents_group(&["advanced", "index.mdx"]));
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("essential-setup"), "Essential setup");
        assert_eq!(humanize_key("install"), "Install");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_group_in_order_keeps_first_seen_order() {
        let groups = group_in_order([("b", 1), ("a", 2), ("b", 3)]);
        assert_eq!(groups, vec![("b", vec![1, 3]), ("a", vec![2])]);
    }

    #[test]
    fn test_build_full_tree_home_and_section() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("home", "Welcome", None),
            entry("install/index.mdx", "Install", Some(1)),
            entry("install/setup.mdx", "Setup", Some(1)),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(
            tree,
            vec![
                SectionNavItem {
                    section_title: "Welcome".to_owned(),
                    section_slug: "/docs/".to_owned(),
                    items: vec![NavItem::new("Welcome", "/docs/", Some(0))],
                    order: Some(0),
                },
                SectionNavItem {
                    section_title: "Install".to_owned(),
                    section_slug: "/docs/install/".to_owned(),
                    items: vec![NavItem::new("Setup", "/docs/install/setup/", Some(1))],
                    order: Some(1),
                },
            ]
        );
    }

    #[test]
    fn test_build_full_tree_home_first_regardless_of_order() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/index.mdx", "Install", Some(0)),
            entry("install/setup.mdx", "Setup", None),
            entry("index.mdx", "Home", Some(5000)),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(section_titles(&tree), vec!["Home", "Install"]);
        assert_eq!(tree[0].section_slug, "/docs/");
    }

    #[test]
    fn test_build_full_tree_sorts_sections_by_order_then_title() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("upgrade/index.mdx", "Upgrade", Some(2)),
            entry("upgrade/notes.mdx", "Notes", None),
            entry("branding/logo.mdx", "Logo", None),
            entry("contributing/guide.mdx", "Guide", None),
            entry("install/index.mdx", "Install", Some(1)),
            entry("install/setup.mdx", "Setup", None),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(
            section_titles(&tree),
            vec!["Install", "Upgrade", "Branding", "Contributing"]
        );
    }

    #[test]
    fn test_build_full_tree_section_without_index_uses_defaults() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("essential-setup/drivers.mdx", "Drivers", Some(4)),
            entry("essential-setup/updates.mdx", "Updates", Some(2)),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].section_title, "Essential setup");
        assert_eq!(tree[0].section_slug, "/docs/essential-setup/");
        // Falls back to the first item's order.
        assert_eq!(tree[0].order, Some(2));
        assert_eq!(titles(&tree[0].items), vec!["Updates", "Drivers"]);
    }

    #[test]
    fn test_build_full_tree_index_without_order_sorts_last() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("upgrade/index.mdx", "Upgrade", None),
            entry("upgrade/notes.mdx", "Notes", Some(1)),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(tree[0].order, Some(DEFAULT_ORDER));
    }

    #[test]
    fn test_build_full_tree_section_title_override() {
        let settings = NavSettings::default().with_locales(["fr"]);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("faq/index.mdx", "Frequently asked", Some(5)),
            entry("faq/general.mdx", "General", None),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(tree[0].section_title, "FAQ");
        assert_eq!(tree[0].section_slug, "/docs/faq/");
    }

    #[test]
    fn test_build_full_tree_filters_by_locale() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("en/install/index.mdx", "Install", Some(1)),
            entry("en/install/setup.mdx", "Setup", None),
            entry("fr/install/index.mdx", "Installation", Some(1)),
            entry("fr/install/setup.mdx", "Configuration", None),
            entry("fr/index.mdx", "Accueil", None),
        ];

        let english = nav.build_full_tree(&entries, Some("en"));
        let french = nav.build_full_tree(&entries, Some("fr"));

        assert_eq!(section_titles(&english), vec!["Install"]);
        assert_eq!(english[0].items[0].slug, "/docs/install/setup/");

        assert_eq!(section_titles(&french), vec!["Accueil", "Installation"]);
        assert_eq!(french[0].section_slug, "/docs/fr/");
        assert_eq!(french[1].section_slug, "/docs/fr/install/");
        assert_eq!(french[1].items[0].slug, "/docs/fr/install/setup/");
    }

    #[test]
    fn test_build_full_tree_empty_entries() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        assert!(nav.build_full_tree(&[], None).is_empty());
    }

    #[test]
    fn test_section_tree_orders_items_then_titles() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/b.mdx", "B", Some(2)),
            entry("install/a.mdx", "A", Some(1)),
            entry("install/d.mdx", "D", None),
            entry("install/c.mdx", "C", None),
        ];

        let items = nav.build_section_tree(&entries, "install", None);

        assert_eq!(titles(&items), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_section_tree_subsection_with_index_nests_children() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/index.mdx", "Install", Some(1)),
            entry("install/advanced/index.mdx", "Advanced", Some(3)),
            entry("install/advanced/tweaks.mdx", "Tweaks", Some(2)),
            entry("install/advanced/drivers.mdx", "Drivers", Some(1)),
            entry("install/setup.mdx", "Setup", Some(1)),
        ];

        let items = nav.build_section_tree(&entries, "install", None);

        assert_eq!(titles(&items), vec!["Setup", "Advanced"]);
        assert_eq!(items[1].slug, "/docs/install/advanced/");
        assert_eq!(titles(&items[1].children), vec!["Drivers", "Tweaks"]);
        assert_eq!(items[1].children[0].slug, "/docs/install/advanced/drivers/");
    }

    #[test]
    fn test_section_tree_subsection_without_index_is_promoted() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/advanced/tweaks.mdx", "Tweaks", Some(2)),
            entry("install/advanced/drivers.mdx", "Drivers", Some(1)),
            entry("install/setup.mdx", "Setup", Some(3)),
        ];

        let items = nav.build_section_tree(&entries, "install", None);

        assert_eq!(titles(&items), vec!["Drivers", "Tweaks", "Setup"]);
        assert!(items.iter().all(|item| item.children.is_empty()));
    }

    #[test]
    fn test_section_tree_sibling_document_is_subsection_index() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/advanced.mdx", "Advanced", Some(1)),
            entry("install/advanced/tweaks.mdx", "Tweaks", None),
        ];

        let items = nav.build_section_tree(&entries, "install", None);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "/docs/install/advanced/");
        assert_eq!(titles(&items[0].children), vec!["Tweaks"]);
    }

    #[test]
    fn test_section_tree_only_index_returns_single_item() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![entry("upgrade/index.mdx", "Upgrade", None)];

        let items = nav.build_section_tree(&entries, "upgrade", None);

        assert_eq!(
            items,
            vec![NavItem::new("Upgrade", "/docs/upgrade/", Some(DEFAULT_ORDER))]
        );
    }

    #[test]
    fn test_section_tree_single_document_section_is_implicit_index() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("en/branding", "Branding", Some(7)),
            entry("home", "Home", None),
        ];

        let tree = nav.build_full_tree(&entries, None);

        assert_eq!(section_titles(&tree), vec!["Home", "Branding"]);
        assert_eq!(tree[1].section_slug, "/docs/branding/");
        assert_eq!(
            tree[1].items,
            vec![NavItem::new("Branding", "/docs/branding/", Some(7))]
        );
    }

    #[test]
    fn test_section_tree_index_not_listed_with_siblings() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("install/index.mdx", "Install", Some(1)),
            entry("install/setup.mdx", "Setup", None),
        ];

        let items = nav.build_section_tree(&entries, "install", None);

        assert_eq!(titles(&items), vec!["Setup"]);
    }

    #[test]
    fn test_build_tree_dispatches_on_scope() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("home", "Home", None),
            entry("install/setup.mdx", "Setup", None),
        ];

        let full = nav.build_tree(&entries, &BuildOptions::default());
        let section = nav.build_tree(
            &entries,
            &BuildOptions {
                scope: NavScope::Section,
                section: Some("install"),
                locale: None,
            },
        );
        let missing = nav.build_tree(
            &entries,
            &BuildOptions {
                scope: NavScope::Section,
                ..Default::default()
            },
        );

        assert_eq!(full.len(), 2);
        assert_eq!(titles(&section.into_items()), vec!["Setup"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_page_title() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);
        let entries = vec![
            entry("home", "Welcome", None),
            entry("install/setup.mdx", "Setup", None),
        ];

        assert_eq!(nav.page_title(&entries, "/docs/install/setup/"), "Setup");
        assert_eq!(nav.page_title(&entries, "/docs/fr/install/setup/"), "Setup");
        assert_eq!(nav.page_title(&entries, "/docs/"), "Welcome");
        assert_eq!(nav.page_title(&entries, "/docs/missing/"), "Documentation");
    }

    #[test]
    fn test_page_slug_places_home_at_root() {
        let settings = NavSettings::default();
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        assert_eq!(nav.page_slug(&entry("home", "Home", None)), "/docs/");
        assert_eq!(nav.page_slug(&entry("fr/index.mdx", "Accueil", None)), "/docs/fr/");
        assert_eq!(
            nav.page_slug(&entry("install/setup.mdx", "Setup", None)),
            "/docs/install/setup/"
        );
    }
}
