//! Outbound navigation hand-off to the host environment.
//!
//! # Responsibility
//! - Describe where a "view publication", "read full article" or contact
//!   submission should send the user.
//! - Forward targets to a host-provided [`Navigator`] without observing any
//!   result.
//!
//! # Invariants
//! - Hand-off is fire-and-forget; core state never depends on it.
//! - Logged metadata never includes the target URL or mail body.

pub mod contact;

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Destination handed to the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffTarget {
    /// External page (publication landing page or PDF).
    ExternalUrl(String),
    /// Full blog article addressed by slug.
    Article { slug: String },
    /// Composed `mailto:` link.
    Mail { href: String },
}

impl HandoffTarget {
    /// Stable kind string used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ExternalUrl(_) => "external_url",
            Self::Article { .. } => "article",
            Self::Mail { .. } => "mail",
        }
    }
}

/// Host-side navigation sink.
pub trait Navigator {
    fn navigate(&self, target: &HandoffTarget);
}

/// Forwards `target` to the host navigator.
pub fn hand_off<N: Navigator + ?Sized>(navigator: &N, target: &HandoffTarget) {
    info!(
        "event=handoff module=handoff status=ok kind={}",
        target.kind()
    );
    navigator.navigate(target);
}

/// Hand-off preparation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    /// Address is blank or not shaped like an e-mail address.
    InvalidEmail(String),
    /// Sender name is blank.
    BlankName,
    /// Contact message body is blank.
    BlankMessage,
    /// The record has nothing to navigate to.
    MissingTarget,
}

impl Display for HandoffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "invalid e-mail address: `{value}`"),
            Self::BlankName => write!(f, "contact name must not be blank"),
            Self::BlankMessage => write!(f, "contact message must not be blank"),
            Self::MissingTarget => write!(f, "record has no navigation target"),
        }
    }
}

impl Error for HandoffError {}

/// Hands off `target` or reports that there is nothing to open.
///
/// Convenience for record helpers such as `Publication::handoff`.
pub fn hand_off_optional<N: Navigator + ?Sized>(
    navigator: &N,
    target: Option<HandoffTarget>,
) -> Result<(), HandoffError> {
    let target = target.ok_or(HandoffError::MissingTarget)?;
    hand_off(navigator, &target);
    Ok(())
}
