//! Slug resolution and normalization.
//!
//! A slug is the canonical URL path of a page: the documentation root, the
//! locale (non-default locales only), the identifier's path segments
//! without file extensions, and a trailing slash:
//!
//! | Identifier              | Slug                       |
//! |-------------------------|----------------------------|
//! | `install/index.mdx`     | `/docs/install/`           |
//! | `en/install/setup.mdx`  | `/docs/install/setup/`     |
//! | `fr/install/setup.mdx`  | `/docs/fr/install/setup/`  |
//! | `index.mdx`             | `/docs/`                   |
//!
//! Resolved and normalized slugs are memoized in a [`SlugCache`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::Navigator;

/// Document file extensions stripped from identifier segments.
const DOCUMENT_EXTENSIONS: &[&str] = &[".mdx", ".md"];

/// Name of the file that represents its enclosing group.
const INDEX_STEM: &str = "index";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum CacheKind {
    Identifier,
    Normalized,
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    kind: CacheKind,
    input: String,
    default_locale: String,
    docs_root: String,
}

/// Memoization cache for slug computations.
///
/// Keys include the default locale and documentation root, so navigators
/// with different settings can share one cache. Navigators sharing a cache
/// must use the same locale predicate. There is no eviction; the cache
/// grows with the content set and is dropped or [`clear`](Self::clear)ed
/// between builds.
///
/// The cache is not `Sync`: it is meant for one build thread at a time.
#[derive(Debug, Default)]
pub struct SlugCache {
    entries: RefCell<HashMap<CacheKey, String>>,
}

impl SlugCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing is memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Forget every memoized slug.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn get_or_compute(&self, key: CacheKey, compute: impl FnOnce() -> String) -> String {
        if let Some(cached) = self.entries.borrow().get(&key) {
            return cached.clone();
        }
        let value = compute();
        self.entries.borrow_mut().insert(key, value.clone());
        value
    }
}

/// Strip a known document extension from a path segment.
pub(crate) fn strip_extension(segment: &str) -> &str {
    DOCUMENT_EXTENSIONS
        .iter()
        .find_map(|ext| segment.strip_suffix(ext))
        .unwrap_or(segment)
}

/// Check whether a path segment is an index file (`index`, `index.md`, `index.mdx`).
pub(crate) fn is_index_segment(segment: &str) -> bool {
    strip_extension(segment) == INDEX_STEM
}

impl Navigator<'_> {
    /// Resolve a content identifier into its canonical slug.
    ///
    /// Never fails: identifiers without usable segments resolve to the root
    /// slug (or the locale's root).
    ///
    /// ```
    /// # use docnav_site::{Navigator, NavSettings, SlugCache};
    /// let settings = NavSettings::default();
    /// let cache = SlugCache::new();
    /// let nav = Navigator::new(&settings, &cache);
    /// assert_eq!(nav.resolve_slug("install/index.mdx"), "/docs/install/");
    /// assert_eq!(nav.resolve_slug("fr/install/setup.mdx"), "/docs/fr/install/setup/");
    /// ```
    #[must_use]
    pub fn resolve_slug(&self, identifier: &str) -> String {
        let key = self.cache_key(CacheKind::Identifier, identifier);
        self.cache.get_or_compute(key, || {
            let (locale, rest) = self.split_identifier(identifier);
            let mut segments: Vec<&str> = rest
                .split('/')
                .filter(|part| !part.is_empty())
                .map(strip_extension)
                .collect();
            if segments.last() == Some(&INDEX_STEM) {
                segments.pop();
            }
            self.compose_slug(locale, &segments)
        })
    }

    /// Reduce a slug to its comparison key.
    ///
    /// Removes a locale prefix (non-default or verbatim default) and the
    /// trailing slash. The root maps to the root slug itself, so
    /// `/docs/fr/` and `/docs/` normalize equally.
    #[must_use]
    pub fn normalize_slug(&self, slug: &str) -> String {
        let root = self.root_slug();
        if slug == "/" || slug == root || slug == self.settings.docs_root {
            return root;
        }

        let key = self.cache_key(CacheKind::Normalized, slug);
        self.cache.get_or_compute(key, || {
            let without_locale = self.remove_locale_from_slug(slug);
            let trimmed = without_locale
                .strip_suffix('/')
                .unwrap_or(&without_locale);
            if trimmed.is_empty() || trimmed == self.settings.docs_root {
                root
            } else {
                trimmed.to_owned()
            }
        })
    }

    /// Check whether two slugs denote the same page.
    #[must_use]
    pub fn is_active_page(&self, current_slug: &str, page_slug: &str) -> bool {
        self.normalize_slug(current_slug) == self.normalize_slug(page_slug)
    }

    /// Root slug (`/docs/`).
    #[must_use]
    pub fn root_slug(&self) -> String {
        format!("{}/", self.settings.docs_root)
    }

    /// Root slug of a locale (`/docs/fr/`, or `/docs/` for the default).
    #[must_use]
    pub fn locale_root_slug(&self, locale: Option<&str>) -> String {
        self.compose_slug(self.target_locale(locale), &[])
    }

    /// Prefix a slug with the documentation root unless already present.
    #[must_use]
    pub fn add_root_prefix(&self, slug: &str) -> String {
        let root = self.settings.docs_root.as_str();
        if self.has_root_prefix(slug) {
            slug.to_owned()
        } else if slug.starts_with('/') {
            format!("{root}{slug}")
        } else {
            format!("{root}/{slug}")
        }
    }

    /// Remove the documentation root from a slug (`/docs/install/` → `/install/`).
    #[must_use]
    pub fn remove_root_prefix<'s>(&self, slug: &'s str) -> &'s str {
        if !self.has_root_prefix(slug) {
            return slug;
        }
        match &slug[self.settings.docs_root.len()..] {
            "" => "/",
            rest => rest,
        }
    }

    /// Section of a slug: the first segment after the root and locale.
    ///
    /// Returns `None` at the root.
    #[must_use]
    pub fn section_from_slug(&self, slug: &str) -> Option<String> {
        let normalized = self.normalize_slug(slug);
        if normalized == self.root_slug() {
            return None;
        }
        self.remove_root_prefix(&normalized)
            .split('/')
            .find(|part| !part.is_empty())
            .map(str::to_owned)
    }

    /// Strip the active locale (or a verbatim default locale) from a slug
    /// so links render locale-agnostic paths.
    #[must_use]
    pub fn display_slug(&self, slug: &str, locale: Option<&str>) -> String {
        let relative = self.remove_root_prefix(slug);
        let candidates = self
            .target_locale(locale)
            .into_iter()
            .chain(std::iter::once(self.settings.default_locale.as_str()));

        for candidate in candidates {
            if let Some(rest) = strip_segment(relative, candidate) {
                return self.add_root_prefix(if rest.is_empty() { "/" } else { rest });
            }
        }
        slug.to_owned()
    }

    /// Build `root[/locale]/seg/.../` from parts.
    pub(crate) fn compose_slug(&self, locale: Option<&str>, segments: &[&str]) -> String {
        let mut slug = self.root_slug();
        for part in locale.into_iter().chain(segments.iter().copied()) {
            slug.push_str(part);
            slug.push('/');
        }
        slug
    }

    fn has_root_prefix(&self, slug: &str) -> bool {
        let root = self.settings.docs_root.as_str();
        slug.strip_prefix(root)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    fn remove_locale_from_slug(&self, slug: &str) -> String {
        let relative = self.remove_root_prefix(slug);
        let locale = self
            .locale_from_slug(slug)
            .unwrap_or(self.settings.default_locale.as_str());

        match strip_segment(relative, locale) {
            Some(rest) => self.add_root_prefix(if rest.is_empty() { "/" } else { rest }),
            None => slug.to_owned(),
        }
    }

    fn cache_key(&self, kind: CacheKind, input: &str) -> CacheKey {
        CacheKey {
            kind,
            input: input.to_owned(),
            default_locale: self.settings.default_locale.clone(),
            docs_root: self.settings.docs_root.clone(),
        }
    }
}

/// Strip a leading `/segment` from a root-relative path at a segment boundary.
///
/// Returns the remainder (starting with `/`, or empty).
fn strip_segment<'p>(path: &'p str, segment: &str) -> Option<&'p str> {
    let rest = path.strip_prefix('/')?.strip_prefix(segment)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}
