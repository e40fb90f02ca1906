//! `docnav search` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_site::{Navigator, SlugCache};

use super::{CommonArgs, nav_settings};
use crate::error::CliError;
use crate::output::{Output, print_json};

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Write the records to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl SearchArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let (config, entries) = self.common.load()?;
        let settings = nav_settings(&config);
        let cache = SlugCache::new();
        let nav = Navigator::new(&settings, &cache);

        let records = nav.search_records(&entries);

        match self.output {
            Some(path) => {
                std::fs::write(&path, serde_json::to_string(&records)?)?;
                Output::new().success(&format!(
                    "Wrote {} search records to {}",
                    records.len(),
                    path.display()
                ));
                Ok(())
            }
            None => print_json(&records),
        }
    }
}
