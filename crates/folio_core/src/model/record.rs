//! Record identity and capability traits.
//!
//! # Responsibility
//! - Provide one identifier type shared by every record variant.
//! - Describe what the filter engine may read from a record without knowing
//!   its concrete shape.
//!
//! # Invariants
//! - `RecordId` is stable and never reused inside one collection.
//! - Absent optional fields surface as empty strings or empty slices.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of one content record.
///
/// Datasets use either numeric or string ids; both are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Where a collection takes its facet values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSource {
    /// Exclusive match on one categorical field (publication type).
    Field,
    /// Membership in the record's tag list (blog tags).
    Tags,
}

/// Identity and display basics shared by all record variants.
pub trait ContentRecord {
    fn id(&self) -> &RecordId;
    fn title(&self) -> &str;

    /// Whether the record is flagged for special-cased presentation.
    fn is_featured(&self) -> bool {
        false
    }
}

/// Free-text capability used by the text predicate.
pub trait Searchable: ContentRecord {
    /// Abstract, excerpt or description. Empty when the record has none.
    fn excerpt(&self) -> &str;

    fn tags(&self) -> &[String];

    /// Concatenation of every field eligible for free-text matching.
    fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title().len() + self.excerpt().len());
        text.push_str(self.title());
        for part in std::iter::once(self.excerpt()).chain(self.tags().iter().map(String::as_str)) {
            if part.is_empty() {
                continue;
            }
            text.push('\n');
            text.push_str(part);
        }
        text
    }
}

/// Categorical capability used by the facet predicate.
pub trait Facetable {
    const FACET_SOURCE: FacetSource;

    /// Single categorical value, or `None` when the record has no category.
    fn facet_value(&self) -> Option<&str>;
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Decodes an optional dataset field, treating `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
