//! Single-focus navigation state machines.
//!
//! # Responsibility
//! - `Carousel`: circular cursor over a fixed-length sequence.
//! - `Disclosure`: at most one expanded/flipped item per list.
//!
//! # Invariants
//! - Each controller instance is owned by exactly one view.
//! - Transitions are synchronous; no controller holds timers or I/O.

pub mod carousel;
pub mod disclosure;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Navigation failures reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Requested index does not exist in the current sequence.
    OutOfRange { index: usize, len: usize },
    /// A carousel cannot be created over an empty sequence.
    EmptyCollection,
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::EmptyCollection => write!(f, "carousel requires a non-empty sequence"),
        }
    }
}

impl Error for NavigationError {}
