//! `docnav pages` command implementation.

use clap::Args;
use docnav_site::{AdjacentPages, Navigator, SlugCache};
use serde::Serialize;

use super::{CommonArgs, nav_settings};
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Slug of the current page, e.g. /docs/install/setup/.
    slug: String,

    /// Locale of the reading order (default: taken from the slug).
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

#[derive(Serialize)]
struct PagesOutput {
    title: String,
    #[serde(flatten)]
    adjacent: AdjacentPages,
}

impl PagesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, entries) = self.common.load()?;
        let settings = nav_settings(&config);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let locale = self
            .locale
            .as_deref()
            .or_else(|| nav.locale_from_slug(&self.slug));
        tracing::info!(slug = %self.slug, locale = ?locale, "Looking up adjacent pages");

        print_json(&PagesOutput {
            title: nav.page_title(&entries, &self.slug),
            adjacent: nav.adjacent_pages(&entries, &self.slug, locale),
        })
    }
}
