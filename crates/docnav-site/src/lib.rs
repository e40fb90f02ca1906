//! Slug resolution and navigation trees for documentation sites.
//!
//! This crate provides:
//! - [`Navigator`]: canonical slugs, locale classification, navigation
//!   trees, sidebar preparation and prev/next lookup over [`ContentEntry`]
//!   lists
//! - [`SlugCache`]: memoization of slug computations, owned by the caller
//! - [`NavSettings`]: default locale, documentation root, section tables
//!
//! The engine is synchronous and total: it never fails, never performs I/O
//! and never mutates its input.
//!
//! # Quick Start
//!
//! ```
//! use docnav_site::{ContentEntry, NavSettings, Navigator, SlugCache};
//!
//! let entries = vec![
//!     ContentEntry::new("home", "Welcome"),
//!     ContentEntry::new("install/index.mdx", "Install").with_order(1),
//!     ContentEntry::new("install/setup.mdx", "Setup").with_order(1),
//! ];
//!
//! let settings = NavSettings::default();
//! let cache = SlugCache::new();
//! let nav = Navigator::new(&settings, &cache);
//!
//! let tree = nav.build_full_tree(&entries, None);
//! assert_eq!(tree[0].section_title, "Welcome");
//! assert_eq!(tree[1].items[0].slug, "/docs/install/setup/");
//!
//! let pages = nav.adjacent_pages(&entries, "/docs/install/setup/", None);
//! assert_eq!(pages.prev.map(|link| link.href), Some("/docs/".to_owned()));
//! ```

mod consumers;
mod entry;
mod locale;
mod nav;
mod navigator;
mod pagination;
mod settings;
mod sidebar;
mod slug;
mod tree;

pub use consumers::{PageRoute, SearchRecord};
pub use entry::{ContentEntry, DEFAULT_ORDER};
pub use locale::{LengthHeuristic, LocaleAllowList, LocalePredicate, lang_code};
pub use nav::{BuildOptions, NavItem, NavScope, NavTree, SectionNavItem};
pub use navigator::Navigator;
pub use pagination::{AdjacentPages, PageNavLink, flatten_tree};
pub use settings::{
    DEFAULT_LOCALE, DOCS_ROOT, FALLBACK_TITLE, NavSettings, SECTION_PRIORITIES, SECTION_TITLES,
    UNLISTED_PRIORITY,
};
pub use slug::SlugCache;
