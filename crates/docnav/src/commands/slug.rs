//! `docnav slug` command implementation.

use clap::Args;
use docnav_site::{Navigator, SlugCache};

use super::{CommonArgs, nav_settings};
use crate::error::CliError;
use crate::output::print_line;

/// Arguments for the slug command.
#[derive(Args)]
pub(crate) struct SlugArgs {
    /// Content identifiers, e.g. fr/install/setup.mdx.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Print comparison keys (locale and trailing slash removed) instead.
    #[arg(long)]
    normalize: bool,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl SlugArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load_config()?;
        let settings = nav_settings(&config);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        for id in &self.ids {
            let slug = nav.resolve_slug(id);
            if self.normalize {
                print_line(&nav.normalize_slug(&slug))?;
            } else {
                print_line(&slug)?;
            }
        }
        Ok(())
    }
}
