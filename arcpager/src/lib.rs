//! A headless path pager.
//!
//! For gesture handling, flings and center snapping, see the `arcpager-adapter` crate.
//!
//! This crate places a sequence of items along a one-dimensional path (a circle hugging one
//! edge of the viewport, or a straight line) and maps a fractional scroll offset to per-item
//! geometry: displacement, rotation, elevation and scale. The path can be bounded or loop
//! infinitely over a finite item count.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - viewport size
//! - raw scroll deltas (finger travel)
//! - item measurement, placement and recycling via [`ItemHost`]
//!
//! ## Features
//!
//! - `std` (default): uses `std` float math.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for options, geometry and state snapshots.
//! - `tracing`: emits `tracing` events under the `arcpager` target.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fling;
mod geometry;
mod math;
mod offset;
mod options;
mod pager;
mod state;
mod types;
mod visibility;


pub use error::ConfigError;
pub use fling::FlingModel;
pub use geometry::{Circle, ELEVATION_SCALE, GeometryMapping, Line, Shape};
pub use offset::OffsetModel;
pub use options::{
    DEFAULT_DISTANCE_RATIO, DEFAULT_INTERVAL, DEFAULT_MAX_REMOVE_OFFSET,
    DEFAULT_MIN_REMOVE_OFFSET, DEFAULT_RADIUS, PagerOptions, ShapeKind,
};
pub use pager::{ItemHost, Pager};
pub use state::PagerState;
pub use types::{
    Frame, Gravity, Invalidation, ItemSize, ItemSlot, MaxVisible, Orientation, PlacedItem,
    RemovalBounds, Transform, Viewport, VisibleItem, ZAlignment,
};
pub use visibility::{DrawOrder, select_visible, select_visible_into};
