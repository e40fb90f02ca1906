//! Entry manifests: a JSON or YAML list of entries.
//!
//! ```yaml
//! - id: install/index.mdx
//!   title: Install
//!   order: 1
//! - id: fr/install/setup.mdx
//!   title: Configuration
//!   description: Préparer la machine
//! ```

use std::path::Path;

use docnav_site::ContentEntry;

use crate::LoadError;
use crate::record::RawEntry;

/// Load and validate entries from a manifest file.
///
/// The format is chosen by extension: `.json`, `.yaml` or `.yml`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, has an unknown
/// extension, or contains an invalid entry.
pub fn load_manifest(path: &Path) -> Result<Vec<ContentEntry>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    let records = match extension.as_deref() {
        Some("json") => parse_json(&content)?,
        Some("yaml" | "yml") => parse_yaml(&content)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };

    let entries = into_entries(records)?;
    tracing::debug!(path = %path.display(), count = entries.len(), "Loaded manifest");
    Ok(entries)
}

fn parse_json(content: &str) -> Result<Vec<RawEntry>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

fn parse_yaml(content: &str) -> Result<Vec<RawEntry>, LoadError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(content)?)
}

fn into_entries(records: Vec<RawEntry>) -> Result<Vec<ContentEntry>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_entry()
                .map_err(|reason| LoadError::InvalidEntry { index, reason })
        })
        .collect()
}
