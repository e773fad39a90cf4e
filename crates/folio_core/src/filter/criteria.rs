//! Filter criteria and facet selection.

use std::fmt::{Display, Formatter};

/// Display label of the unconstrained facet selection.
pub const ALL_FACETS_LABEL: &str = "All";

/// Facet selection.
///
/// `All` is a reserved variant, so a real facet value spelled "All" is
/// carried as `Value("All")` and filters like any other value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// Maps a UI label back to a selection: the `All` label selects the
    /// sentinel, anything else selects that value.
    ///
    /// Only for label round-trips from presentation; vocabulary derivation
    /// never goes through this.
    pub fn parse_label(label: &str) -> Self {
        if label == ALL_FACETS_LABEL {
            Self::All
        } else {
            Self::Value(label.to_string())
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(value) => Some(value.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FACETS_LABEL,
            Self::Value(value) => value.as_str(),
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Live search/facet selection of one list.
///
/// Defaults to an empty search term and the `All` facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub facet: Facet,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, facet: Facet) -> Self {
        Self {
            search_term: search_term.into(),
            facet,
        }
    }

    /// Trimmed, lower-cased search needle used for matching.
    pub fn normalized_search_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    /// True when the criteria cannot exclude any record.
    pub fn is_neutral(&self) -> bool {
        self.search_term.trim().is_empty() && self.facet.is_all()
    }
}
