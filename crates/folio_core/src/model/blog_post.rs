//! Blog post record.
//!
//! # Invariants
//! - Tags double as the facet: a post matches a tag facet by membership.
//! - `slug` is the article hand-off key.

use crate::handoff::HandoffTarget;
use crate::model::record::{
    non_empty, null_as_default, ContentRecord, FacetSource, Facetable, RecordId, Searchable,
};
use serde::{Deserialize, Serialize};

/// One entry of the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// ISO date string as written in the dataset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl BlogPost {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            author: String::new(),
            date: String::new(),
            read_time: String::new(),
            tags: Vec::new(),
            slug: String::new(),
            featured: false,
        }
    }

    /// Target for "read full article".
    pub fn handoff(&self) -> Option<HandoffTarget> {
        non_empty(&self.slug).map(|slug| HandoffTarget::Article {
            slug: slug.trim().to_string(),
        })
    }
}

impl ContentRecord for BlogPost {
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

impl Searchable for BlogPost {
    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Facetable for BlogPost {
    const FACET_SOURCE: FacetSource = FacetSource::Tags;

    fn facet_value(&self) -> Option<&str> {
        None
    }
}
