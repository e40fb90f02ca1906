//! Navigation engine handle.
//!
//! [`Navigator`] bundles the settings and the slug cache every operation
//! needs. It is cheap to construct, so callers that want to override a
//! setting for a single call build a second navigator over the same cache.
//!
//! Operations live in the modules that own them:
//! - slug resolution in [`slug`](crate::slug)
//! - locale classification in [`locale`](crate::locale)
//! - tree building in [`tree`](crate::tree)
//! - sidebar preparation in [`sidebar`](crate::sidebar)
//! - prev/next lookup in [`pagination`](crate::pagination)
//! - search and route queries in [`consumers`](crate::consumers)

use crate::{NavSettings, SlugCache};

/// Navigation engine over borrowed settings and a shared slug cache.
#[derive(Clone, Copy, Debug)]
pub struct Navigator<'a> {
    pub(crate) settings: &'a NavSettings,
    pub(crate) cache: &'a SlugCache,
}

impl<'a> Navigator<'a> {
    /// Create a navigator.
    #[must_use]
    pub fn new(settings: &'a NavSettings, cache: &'a SlugCache) -> Self {
        Self { settings, cache }
    }

    /// Settings this navigator was built with.
    #[must_use]
    pub fn settings(&self) -> &'a NavSettings {
        self.settings
    }

    /// Slug cache shared by this navigator.
    #[must_use]
    pub fn cache(&self) -> &'a SlugCache {
        self.cache
    }
}
