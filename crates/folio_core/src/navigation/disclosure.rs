//! Single-slot disclosure (expand/flip) controller.
//!
//! # Invariants
//! - At most one id is open per controller.
//! - Opening a new id implicitly closes the previous one.

use log::trace;

/// Observable state of a [`Disclosure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState<K> {
    Closed,
    OpenFor(K),
}

/// Tracks which single item of a list is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure<K> {
    open: Option<K>,
}

impl<K> Default for Disclosure<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> Disclosure<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes `id` if it is open, otherwise opens it in place of any other.
    pub fn toggle(&mut self, id: K) {
        if self.open.as_ref() == Some(&id) {
            self.open = None;
            trace!("event=disclosure_closed module=navigation");
        } else {
            self.open = Some(id);
            trace!("event=disclosure_opened module=navigation");
        }
    }

    /// Opens `id`, closing any other item. Idempotent for the open id.
    pub fn open(&mut self, id: K) {
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_id(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, id: &K) -> bool {
        self.open.as_ref() == Some(id)
    }

    pub fn state(&self) -> DisclosureState<&K> {
        match &self.open {
            Some(id) => DisclosureState::OpenFor(id),
            None => DisclosureState::Closed,
        }
    }

    /// Closes the open item when it is not among `visible`.
    ///
    /// Returns `true` when this call closed something.
    pub fn retain_visible<'a, I>(&mut self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let Some(open) = &self.open else {
            return false;
        };
        if visible.into_iter().any(|id| id == open) {
            return false;
        }
        self.open = None;
        trace!("event=disclosure_pruned module=navigation");
        true
    }
}
