//! Faceted filter engine.
//!
//! # Responsibility
//! - Combine free-text search with a single facet selection.
//! - Derive the facet vocabulary offered to the user.
//!
//! # Invariants
//! - Filtering selects a subsequence and never reorders records.
//! - The "no constraint" selection is `Facet::All`, never a string value.

pub mod criteria;
pub mod engine;
