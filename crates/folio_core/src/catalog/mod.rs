//! Catalog stores binding record collections to live filter criteria.
//!
//! # Responsibility
//! - Own one immutable record sequence per list view.
//! - Serve memoized vocabulary, visible and featured views.
//!
//! # Invariants
//! - Records are never mutated or reordered after construction.
//! - Derived views always reflect the current criteria on read.

pub mod store;
