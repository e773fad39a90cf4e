//! Content discovery and navigation core for the portfolio site.
//! This crate owns every filtering and selection invariant; presentation
//! only reads snapshots and forwards user gestures.

pub mod catalog;
pub mod config;
pub mod content;
pub mod filter;
pub mod handoff;
pub mod logging;
pub mod model;
pub mod navigation;

pub use catalog::store::{CatalogOptions, CatalogStore};
pub use config::{ConfigError, LoggingConfig, SiteConfig};
pub use content::{load_records, parse_records, ContentError};
pub use filter::criteria::{Facet, FilterCriteria, ALL_FACETS_LABEL};
pub use filter::engine::{derive_vocabulary, filter, filter_positions, matches};
pub use handoff::contact::{compose_mail_link, submit_contact, ContactForm, DEFAULT_MAIL_SUBJECT};
pub use handoff::{hand_off, hand_off_optional, HandoffError, HandoffTarget, Navigator};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::achievement::Achievement;
pub use model::blog_post::BlogPost;
pub use model::experience::ExperienceEntry;
pub use model::publication::Publication;
pub use model::record::{ContentRecord, FacetSource, Facetable, RecordId, Searchable};
pub use navigation::carousel::Carousel;
pub use navigation::disclosure::{Disclosure, DisclosureState};
pub use navigation::NavigationError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
