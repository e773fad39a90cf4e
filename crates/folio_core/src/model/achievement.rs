//! Achievement gallery record.

use crate::model::record::{
    non_empty, null_as_default, ContentRecord, FacetSource, Facetable, RecordId, Searchable,
};
use serde::{Deserialize, Serialize};

/// One award or recognition shown in the achievement carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Recognition category, serialized as `type`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Achievement {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            event: String::new(),
            year: String::new(),
            description: String::new(),
            kind: String::new(),
        }
    }
}

impl ContentRecord for Achievement {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Searchable for Achievement {
    fn excerpt(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Facetable for Achievement {
    const FACET_SOURCE: FacetSource = FacetSource::Field;

    fn facet_value(&self) -> Option<&str> {
        non_empty(&self.kind)
    }
}
