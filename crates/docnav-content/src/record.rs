//! Unvalidated entry records shared by the manifest and scan loaders.

use docnav_site::ContentEntry;
use serde::Deserialize;

/// Largest accepted `order` value.
pub(crate) const MAX_ORDER: i64 = 9999;

/// Entry fields as written by authors, before validation.
///
/// `order` is signed so negative values are reported instead of failing
/// deserialization with a type error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEntry {
    pub id: String,
    pub title: Option<String>,
    pub order: Option<i64>,
    pub description: Option<String>,
}

impl RawEntry {
    /// Validate the record and convert it into a [`ContentEntry`].
    ///
    /// Returns the reason the record was rejected on failure.
    pub fn into_entry(self) -> Result<ContentEntry, String> {
        if self.id.trim().is_empty() {
            return Err("id cannot be empty".to_owned());
        }

        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(format!("{}: title cannot be empty", self.id));
        }

        let order = match self.order {
            Some(order) if !(0..=MAX_ORDER).contains(&order) => {
                return Err(format!(
                    "{}: order must be between 0 and {MAX_ORDER}, got {order}",
                    self.id
                ));
            }
            Some(order) => u32::try_from(order).ok(),
            None => None,
        };

        let description = self.description.filter(|d| !d.trim().is_empty());

        Ok(ContentEntry {
            id: self.id,
            title,
            order,
            description,
        })
    }
}
