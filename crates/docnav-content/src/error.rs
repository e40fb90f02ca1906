use std::path::PathBuf;

/// Error type for content loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON manifest parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML manifest parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Invalid scan pattern.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
    /// Manifest with an extension other than `.json`, `.yaml` or `.yml`.
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Structurally invalid manifest entry.
    #[error("Invalid entry #{index}: {reason}")]
    InvalidEntry {
        /// Position of the entry in the manifest.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
    /// Unparseable or incomplete document frontmatter.
    #[error("Invalid frontmatter in {}: {message}", .path.display())]
    Frontmatter {
        /// Document path.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
}
