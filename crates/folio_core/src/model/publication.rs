//! Publication record.
//!
//! # Invariants
//! - `kind` is the exclusive facet (Conference, Journal, Preprint, ...).
//! - Missing optional fields deserialize to empty values.

use crate::handoff::HandoffTarget;
use crate::model::record::{
    non_empty, null_as_default, ContentRecord, FacetSource, Facetable, RecordId, Searchable,
};
use serde::{Deserialize, Serialize};

/// One entry of the publication catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue: String,
    #[serde(default)]
    pub year: Option<u16>,
    /// Serialized as `type` to match the dataset schema.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pdf: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doi: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(rename = "abstract", default, deserialize_with = "null_as_default")]
    pub abstract_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Publication {
    /// Creates a publication with only identity, title and type set.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            venue: String::new(),
            year: None,
            kind: kind.into(),
            link: String::new(),
            pdf: String::new(),
            doi: String::new(),
            thumbnail: String::new(),
            abstract_text: String::new(),
            tags: Vec::new(),
            featured: false,
        }
    }

    /// Target for "view publication": the landing link, else the PDF.
    pub fn handoff(&self) -> Option<HandoffTarget> {
        non_empty(&self.link)
            .or_else(|| non_empty(&self.pdf))
            .map(|url| HandoffTarget::ExternalUrl(url.trim().to_string()))
    }
}

impl ContentRecord for Publication {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Searchable for Publication {
    fn excerpt(&self) -> &str {
        &self.abstract_text
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Facetable for Publication {
    const FACET_SOURCE: FacetSource = FacetSource::Field;

    fn facet_value(&self) -> Option<&str> {
        non_empty(&self.kind)
    }
}
