//! YAML frontmatter extraction from document files.
//!
//! Only the leading `---` block is read. Document bodies are never parsed.

use serde::Deserialize;

/// Frontmatter fields the navigation needs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FrontmatterFields {
    pub title: Option<String>,
    pub order: Option<i64>,
    pub description: Option<String>,
}

/// Return the YAML between the opening and closing `---` delimiters.
///
/// Returns `None` if the content does not start with a frontmatter block
/// or the block is never closed.
pub(crate) fn split_frontmatter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse frontmatter fields from YAML content.
///
/// Empty content yields default fields.
pub(crate) fn parse_fields(yaml: &str) -> Result<FrontmatterFields, serde_yaml::Error> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(FrontmatterFields::default());
    }
    serde_yaml::from_str(trimmed)
}
