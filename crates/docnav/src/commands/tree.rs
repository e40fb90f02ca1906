//! `docnav tree` command implementation.

use clap::Args;
use docnav_site::{BuildOptions, NavScope, NavTree, Navigator, SlugCache};

use super::{CommonArgs, nav_settings};
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Print only the items of this section.
    #[arg(long)]
    section: Option<String>,

    /// Locale to build the tree for (default: the default locale).
    #[arg(short, long)]
    locale: Option<String>,

    /// Prepare the tree for sidebar display: locale-free slugs, duplicates
    /// removed, sections in priority order.
    #[arg(long, conflicts_with = "section")]
    sidebar: bool,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, entries) = self.common.load()?;
        let settings = nav_settings(&config);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let locale = self.locale.as_deref();
        let options = BuildOptions {
            scope: if self.section.is_some() {
                NavScope::Section
            } else {
                NavScope::Full
            },
            section: self.section.as_deref(),
            locale,
        };

        let tree = nav.build_tree(&entries, &options);
        let tree = if self.sidebar {
            NavTree::Sections(nav.prepare_for_display(tree.into_sections(), locale))
        } else {
            tree
        };

        print_json(&tree)
    }
}
