//! Gesture coordination for the `arcpager` crate.
//!
//! The `arcpager` crate is UI-agnostic and focuses on the offset model and the geometry. This
//! crate adds the parts of a pager that live in time:
//!
//! - A gesture state machine ([`ScrollCoordinator`]) that turns drags and releases into scroll
//!   deltas, flings and smooth scrolls
//! - Center snapping ([`SnapEngine`]) with a bounded number of corrective scrolls
//! - Tween helpers used for the animations
//!
//! Everything is driven by explicit `now_ms` timestamps, so it runs the same under a UI frame
//! clock and in tests.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod coordinator;
mod error;
mod events;
mod snap;
mod tween;

#[cfg(test)]
mod tests;

pub use coordinator::{
    CoordinatorOptions, DEFAULT_MAX_FLING_VELOCITY, DEFAULT_MIN_FLING_VELOCITY, ScrollCoordinator,
};
pub use error::AttachError;
pub use events::{PagerEvent, ScrollState, Velocity};
pub use snap::{DEFAULT_CORRECTION_BUDGET, SnapCommand, SnapEngine};
pub use tween::{Easing, Tween};
