//! Navigation settings.
//!
//! The engine does not own its configuration constants. Callers build a
//! [`NavSettings`] (usually from `docnav.toml`) and hand it to a
//! [`Navigator`](crate::Navigator). The [`Default`] impl carries the values
//! the documentation site ships with.

use std::collections::HashMap;
use std::sync::Arc;

use crate::locale::{LengthHeuristic, LocaleAllowList, LocalePredicate};

/// Locale whose identifiers and slugs carry no visible prefix.
pub const DEFAULT_LOCALE: &str = "en";

/// Root path segment every slug starts with.
pub const DOCS_ROOT: &str = "/docs";

/// Title returned when a slug matches no entry.
pub const FALLBACK_TITLE: &str = "Documentation";

/// Sidebar priority of sections missing from the priority table.
pub const UNLISTED_PRIORITY: u32 = 999;

/// Sidebar section priorities, lower first.
pub const SECTION_PRIORITIES: &[(&str, u32)] = &[
    ("install", 1),
    ("upgrade", 2),
    ("essential-setup", 3),
    ("atlas-configuration", 4),
    ("faq", 5),
    ("contributing", 6),
    ("branding", 7),
];

/// Section titles that win over index titles and humanized keys.
pub const SECTION_TITLES: &[(&str, &str)] = &[("faq", "FAQ")];

/// Configuration constants consumed by the navigation engine.
///
/// The default locale predicate is [`LengthHeuristic`], which reads any
/// unprefixed 2–5 character first segment as a locale. An unprefixed
/// `faq/index.mdx` is therefore dropped from the default-locale tree even
/// though `faq` is in the default priority and title tables. Sites with
/// short section names should list their locales with
/// [`NavSettings::with_locales`].
#[derive(Clone, Debug)]
pub struct NavSettings {
    /// Default locale code.
    pub default_locale: String,
    /// Documentation root without trailing slash (e.g. `/docs`).
    pub docs_root: String,
    /// Section key → sidebar priority.
    pub section_priorities: HashMap<String, u32>,
    /// Section key → forced display title.
    pub section_titles: HashMap<String, String>,
    /// Decides whether a leading path segment is a locale.
    pub locale_predicate: Arc<dyn LocalePredicate>,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_owned(),
            docs_root: DOCS_ROOT.to_owned(),
            section_priorities: SECTION_PRIORITIES
                .iter()
                .map(|&(name, priority)| (name.to_owned(), priority))
                .collect(),
            section_titles: SECTION_TITLES
                .iter()
                .map(|&(name, title)| (name.to_owned(), title.to_owned()))
                .collect(),
            locale_predicate: Arc::new(LengthHeuristic),
        }
    }
}

impl NavSettings {
    /// Replace the default locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Replace the documentation root. A trailing slash is dropped.
    #[must_use]
    pub fn with_docs_root(mut self, root: impl Into<String>) -> Self {
        let root = root.into();
        self.docs_root = root.trim_end_matches('/').to_owned();
        self
    }

    /// Classify locales with an explicit allow-list instead of the length heuristic.
    #[must_use]
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locale_predicate = Arc::new(LocaleAllowList::new(locales));
        self
    }

    /// Replace the section priority table.
    #[must_use]
    pub fn with_section_priorities(mut self, priorities: HashMap<String, u32>) -> Self {
        self.section_priorities = priorities;
        self
    }

    /// Replace the section title overrides.
    #[must_use]
    pub fn with_section_titles(mut self, titles: HashMap<String, String>) -> Self {
        self.section_titles = titles;
        self
    }

    /// Sidebar priority for a section key.
    #[must_use]
    pub fn priority_of(&self, section: &str) -> u32 {
        self.section_priorities
            .get(section)
            .copied()
            .unwrap_or(UNLISTED_PRIORITY)
    }
}
