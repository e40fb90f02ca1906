//! Locale classification.
//!
//! A locale is a distinguished first path component. Whether a component
//! *is* a locale is decided by a [`LocalePredicate`]: the default
//! [`LengthHeuristic`] accepts any 2–5 character segment, which also matches
//! short section names such as `faq`. Sites that know their locales should
//! use [`LocaleAllowList`].

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::Navigator;

/// Locale prefix at the start of a request pathname (`/fr/...`, `/pt-br/...`).
static PATHNAME_LOCALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([a-z]{2}(?:-[a-z]{2})?)/").unwrap());

/// Decides whether a path segment names a non-default locale.
pub trait LocalePredicate: fmt::Debug + Send + Sync {
    /// Return `true` if `segment` is a locale other than `default_locale`.
    fn is_locale(&self, segment: &str, default_locale: &str) -> bool;
}

/// Treats any 2–5 character segment other than the default locale as a locale.
///
/// Short section names match too: under this predicate an unprefixed
/// `faq/index.mdx` belongs to locale `faq`. Use [`LocaleAllowList`] when
/// section keys can be that short.
#[derive(Clone, Copy, Debug, Default)]
pub struct LengthHeuristic;

impl LocalePredicate for LengthHeuristic {
    fn is_locale(&self, segment: &str, default_locale: &str) -> bool {
        (2..=5).contains(&segment.chars().count()) && segment != default_locale
    }
}

/// Accepts only the listed locale codes.
#[derive(Clone, Debug, Default)]
pub struct LocaleAllowList {
    locales: HashSet<String>,
}

impl LocaleAllowList {
    /// Create an allow-list from locale codes.
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }
}

impl LocalePredicate for LocaleAllowList {
    fn is_locale(&self, segment: &str, default_locale: &str) -> bool {
        segment != default_locale && self.locales.contains(segment)
    }
}

impl Navigator<'_> {
    /// Locale encoded in a content identifier.
    ///
    /// The candidate is the substring before the first separator. Returns
    /// `None` for identifiers without a separator, for the default locale,
    /// and for segments the locale predicate rejects.
    ///
    /// ```
    /// # use docnav_site::{Navigator, NavSettings, SlugCache};
    /// let settings = NavSettings::default();
    /// let cache = SlugCache::new();
    /// let nav = Navigator::new(&settings, &cache);
    /// assert_eq!(nav.locale_from_identifier("fr/install/index.mdx"), Some("fr"));
    /// assert_eq!(nav.locale_from_identifier("en/install/index.mdx"), None);
    /// ```
    #[must_use]
    pub fn locale_from_identifier<'i>(&self, identifier: &'i str) -> Option<&'i str> {
        let (first, _) = identifier.split_once('/')?;
        self.is_locale(first).then_some(first)
    }

    /// Locale encoded in the first segment after the root prefix of a slug.
    ///
    /// `/docs/fr/install/` gives `fr`, `/docs/install/` gives `None`.
    #[must_use]
    pub fn locale_from_slug<'s>(&self, slug: &'s str) -> Option<&'s str> {
        let first = self
            .remove_root_prefix(slug)
            .split('/')
            .find(|part| !part.is_empty())?;
        self.is_locale(first).then_some(first)
    }

    /// Normalize a requested locale: the default locale becomes `None`.
    pub(crate) fn target_locale<'l>(&self, locale: Option<&'l str>) -> Option<&'l str> {
        locale.filter(|l| !l.is_empty() && *l != self.settings.default_locale)
    }

    /// Split an identifier into its locale and the locale-relative remainder.
    ///
    /// A verbatim default-locale prefix is stripped as well, so `en/a.md`
    /// and `a.md` share the same remainder.
    pub(crate) fn split_identifier<'i>(&self, identifier: &'i str) -> (Option<&'i str>, &'i str) {
        if let Some(locale) = self.locale_from_identifier(identifier) {
            return (Some(locale), &identifier[locale.len() + 1..]);
        }
        let rest = identifier
            .strip_prefix(self.settings.default_locale.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(identifier);
        (None, rest)
    }

    fn is_locale(&self, segment: &str) -> bool {
        segment != self.settings.default_locale
            && self
                .settings
                .locale_predicate
                .is_locale(segment, &self.settings.default_locale)
    }

    /// Check whether a locale is the default one (`None` counts as default).
    #[must_use]
    pub fn is_default_locale(&self, locale: Option<&str>) -> bool {
        self.target_locale(locale).is_none()
    }

    /// URL prefix for a locale: `fr/` for non-default locales, empty otherwise.
    #[must_use]
    pub fn locale_prefix(&self, locale: Option<&str>) -> String {
        self.target_locale(locale)
            .map(|l| format!("{l}/"))
            .unwrap_or_default()
    }

    /// Detect the locale of a request pathname, falling back to the default.
    ///
    /// `/fr/docs/install/` gives `fr`; `/docs/install/` gives the default locale.
    #[must_use]
    pub fn current_locale<'p>(&'p self, pathname: &'p str) -> &'p str {
        PATHNAME_LOCALE_RE
            .captures(pathname)
            .and_then(|caps| caps.get(1))
            .map_or(self.settings.default_locale.as_str(), |m| m.as_str())
    }
}

/// Full language tag for a locale, used in `lang` attributes.
#[must_use]
pub fn lang_code(locale: &str) -> &str {
    if locale == "en" { "en-US" } else { locale }
}
