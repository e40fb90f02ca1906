//! Content entry loading for docnav.
//!
//! Entries come from one of two sources:
//! - an entry manifest, a JSON or YAML list (see [`load_manifest`])
//! - a source directory scanned for `.md`/`.mdx` frontmatter (see [`scan_source_dir`])
//!
//! Either way each entry is checked before it reaches the navigation
//! engine: identifiers and titles must be non-empty, orders must lie in
//! `0..=9999`, and identifiers must be unique.

mod error;
mod frontmatter;
mod manifest;
mod record;
mod scan;

use std::collections::HashSet;
use std::path::Path;

use docnav_site::ContentEntry;

pub use error::LoadError;
pub use manifest::load_manifest;
pub use scan::scan_source_dir;

/// Load entries from `manifest` if given, otherwise by scanning `source_dir`.
///
/// # Errors
///
/// Returns an error if loading fails or two entries share an identifier.
pub fn load_entries(
    source_dir: &Path,
    manifest: Option<&Path>,
) -> Result<Vec<ContentEntry>, LoadError> {
    let entries = match manifest {
        Some(path) => load_manifest(path)?,
        None => scan_source_dir(source_dir)?,
    };
    ensure_unique_ids(&entries)?;
    Ok(entries)
}

fn ensure_unique_ids(entries: &[ContentEntry]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if !seen.insert(entry.id.as_str()) {
            return Err(LoadError::InvalidEntry {
                index,
                reason: format!("duplicate id {}", entry.id),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_entries_prefers_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(docs.join("scanned.md"), "---\ntitle: Scanned\n---\n").unwrap();
        let manifest = dir.path().join("entries.json");
        std::fs::write(&manifest, r#"[{"id": "listed.md", "title": "Listed"}]"#).unwrap();

        let from_manifest = load_entries(&docs, Some(&manifest)).unwrap();
        let from_scan = load_entries(&docs, None).unwrap();

        assert_eq!(from_manifest, vec![ContentEntry::new("listed.md", "Listed")]);
        assert_eq!(from_scan, vec![ContentEntry::new("scanned.md", "Scanned")]);
    }

    #[test]
    fn test_load_entries_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("entries.yaml");
        std::fs::write(
            &manifest,
            "- id: a.md\n  title: A\n- id: b.md\n  title: B\n- id: a.md\n  title: Again\n",
        )
        .unwrap();

        let err = load_entries(dir.path(), Some(&manifest)).unwrap_err();

        assert!(matches!(err, LoadError::InvalidEntry { index: 2, .. }));
        assert!(err.to_string().contains("duplicate"));
    }
}
