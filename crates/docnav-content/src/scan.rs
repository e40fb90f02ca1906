//! Content discovery by scanning a source directory for documents.

use std::fs;
use std::path::{Path, PathBuf};

use docnav_site::ContentEntry;
use glob::MatchOptions;

use crate::LoadError;
use crate::frontmatter::{parse_fields, split_frontmatter};
use crate::record::RawEntry;

/// Document extensions picked up by the scan.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Scan `source_dir` for `.md`/`.mdx` documents and read their frontmatter.
///
/// Identifiers are paths relative to `source_dir` with `/` separators
/// (`fr/install/setup.mdx`), returned in path order. Hidden files and
/// directories are skipped, as are documents without a frontmatter block.
/// A missing source directory yields no entries.
///
/// # Errors
///
/// Returns an error if a document cannot be read, its frontmatter is
/// malformed, or it lacks a valid title or order.
pub fn scan_source_dir(source_dir: &Path) -> Result<Vec<ContentEntry>, LoadError> {
    if !source_dir.is_dir() {
        tracing::warn!(path = %source_dir.display(), "Source directory not found");
        return Ok(Vec::new());
    }

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::default()
    };
    let base = glob::Pattern::escape(&source_dir.to_string_lossy());

    let mut paths: Vec<PathBuf> = Vec::new();
    for extension in DOCUMENT_EXTENSIONS {
        for path in glob::glob_with(&format!("{base}/**/*.{extension}"), options)? {
            paths.push(path.map_err(glob::GlobError::into_error)?);
        }
    }
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in &paths {
        if let Some(entry) = read_entry(source_dir, path)? {
            entries.push(entry);
        }
    }
    tracing::debug!(path = %source_dir.display(), count = entries.len(), "Scanned documents");
    Ok(entries)
}

fn read_entry(source_dir: &Path, path: &Path) -> Result<Option<ContentEntry>, LoadError> {
    let content = fs::read_to_string(path)?;
    let Some(yaml) = split_frontmatter(&content) else {
        tracing::warn!(path = %path.display(), "No frontmatter, skipping");
        return Ok(None);
    };

    let frontmatter_error = |message: String| LoadError::Frontmatter {
        path: path.to_path_buf(),
        message,
    };
    let fields = parse_fields(yaml).map_err(|e| frontmatter_error(e.to_string()))?;

    RawEntry {
        id: identifier(source_dir, path),
        title: fields.title,
        order: fields.order,
        description: fields.description,
    }
    .into_entry()
    .map(Some)
    .map_err(frontmatter_error)
}

/// Relative path of a document with `/` separators.
fn identifier(source_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(source_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
