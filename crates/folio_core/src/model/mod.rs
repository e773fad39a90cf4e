//! Content record model for the portfolio sections.
//!
//! # Responsibility
//! - Define the record variants rendered by the catalog, blog, gallery and
//!   experience sections.
//! - Expose the capability traits the filter engine is written against.
//!
//! # Invariants
//! - Every record carries a `RecordId` unique within its collection.
//! - Records are immutable once supplied to a catalog.

pub mod achievement;
pub mod blog_post;
pub mod experience;
pub mod publication;
pub mod record;
