//! CLI command implementations.

mod pages;
mod routes;
mod search;
mod slug;
mod tree;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_content::load_entries;
use docnav_site::{ContentEntry, NavSettings};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use pages::PagesArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use search::SearchArgs;
pub(crate) use slug::SlugArgs;
pub(crate) use tree::TreeArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory to scan (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Entry manifest, JSON or YAML (overrides config).
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Default locale (overrides config).
    #[arg(long)]
    default_locale: Option<String>,

    /// Documentation root, e.g. /docs (overrides config).
    #[arg(long)]
    docs_root: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CommonArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            manifest: self.manifest.clone(),
            default_locale: self.default_locale.clone(),
            docs_root: self.docs_root.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and content entries.
    pub(crate) fn load(&self) -> Result<(Config, Vec<ContentEntry>), CliError> {
        let config = self.load_config()?;
        let content = &config.content_resolved;
        let entries = load_entries(&content.source_dir, content.manifest.as_deref())?;

        if self.verbose {
            let source = content.manifest.as_ref().unwrap_or(&content.source_dir);
            Output::new().info(&format!(
                "Loaded {} entries from {}",
                entries.len(),
                source.display()
            ));
        }
        Ok((config, entries))
    }
}

/// Build navigation settings from the loaded configuration.
pub(crate) fn nav_settings(config: &Config) -> NavSettings {
    let mut settings = NavSettings::default()
        .with_default_locale(&config.site.default_locale)
        .with_docs_root(&config.site.docs_root);
    if let Some(locales) = &config.site.locales {
        settings = settings.with_locales(locales.iter().cloned());
    }
    if let Some(priorities) = &config.sections.priorities {
        settings = settings.with_section_priorities(priorities.clone());
    }
    if let Some(titles) = &config.sections.titles {
        settings = settings.with_section_titles(titles.clone());
    }
    settings
}
