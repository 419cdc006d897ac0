/// Gesture state of a [`crate::ScrollCoordinator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    #[default]
    Idle,
    /// The pointer is down and moving the pager.
    Dragging,
    /// An animation (fling, smooth scroll or snap) is moving the pager.
    Settling,
}

/// Pointer velocity at release, in raw units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Notifications queued by the coordinator, in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagerEvent {
    ScrollStateChanged(ScrollState),
    /// A raw delta the pager actually consumed, split onto the scroll axis.
    Scrolled { dx: f32, dy: f32 },
    /// Forwarded by the snap engine on every state change.
    PageScrollStateChanged(ScrollState),
    /// Backing index of the item that settled at the center.
    PageSelected(usize),
}
