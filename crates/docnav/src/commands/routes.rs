//! `docnav routes` command implementation.

use clap::Args;
use docnav_site::{Navigator, SlugCache};

use super::{CommonArgs, nav_settings};
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, entries) = self.common.load()?;
        let settings = nav_settings(&config);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        print_json(&nav.page_routes(&entries))
    }
}
