//! Contact form mail-link composition.
//!
//! # Invariants
//! - Subject falls back to the configured default when blank.
//! - Subject and body are percent-encoded before joining the link.

use crate::handoff::{hand_off, HandoffError, HandoffTarget, Navigator};
use once_cell::sync::Lazy;
use regex::Regex;

/// Subject used when neither the form nor configuration supplies one.
pub const DEFAULT_MAIL_SUBJECT: &str = "Contact from Portfolio Website";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Contact form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Clears every field, as done after a submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Returns whether `value` is shaped like an e-mail address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Builds the `mailto:` link for one contact submission.
///
/// # Errors
/// - `InvalidEmail` when the recipient or the sender address is malformed.
/// - `BlankName` / `BlankMessage` when the name or message is blank.
pub fn compose_mail_link(
    recipient: &str,
    default_subject: &str,
    form: &ContactForm,
) -> Result<String, HandoffError> {
    let recipient = recipient.trim();
    if !is_valid_email(recipient) {
        return Err(HandoffError::InvalidEmail(recipient.to_string()));
    }
    if form.name.trim().is_empty() {
        return Err(HandoffError::BlankName);
    }
    if !is_valid_email(&form.email) {
        return Err(HandoffError::InvalidEmail(form.email.trim().to_string()));
    }
    if form.message.trim().is_empty() {
        return Err(HandoffError::BlankMessage);
    }

    let subject = [form.subject.as_str(), default_subject]
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_MAIL_SUBJECT);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name.trim(),
        form.email.trim(),
        form.message
    );

    Ok(format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    ))
}

/// Composes the mail link, hands it off and resets the form.
///
/// The form is left untouched when composition fails.
pub fn submit_contact<N: Navigator + ?Sized>(
    navigator: &N,
    recipient: &str,
    default_subject: &str,
    form: &mut ContactForm,
) -> Result<(), HandoffError> {
    let href = compose_mail_link(recipient, default_subject, form)?;
    hand_off(navigator, &HandoffTarget::Mail { href });
    form.reset();
    Ok(())
}
