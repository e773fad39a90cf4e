//! Experience timeline record.
//!
//! Entries are listed in source order; each can be expanded to show its
//! highlights through a `Disclosure` keyed by `RecordId`.

use crate::model::record::{
    non_empty, null_as_default, ContentRecord, FacetSource, Facetable, RecordId, Searchable,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    /// `research`, `industry`, ...; serialized as `type`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl ContentRecord for ExperienceEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Searchable for ExperienceEntry {
    fn excerpt(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Facetable for ExperienceEntry {
    const FACET_SOURCE: FacetSource = FacetSource::Field;

    fn facet_value(&self) -> Option<&str> {
        non_empty(&self.kind)
    }
}
