use crate::ConfigError;

/// Which edge of the viewport the circular path hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gravity {
    Left,
    Right,
    Top,
    Bottom,
}

impl Gravity {
    pub const RAW_LEFT: i32 = 10;
    pub const RAW_RIGHT: i32 = 11;
    pub const RAW_TOP: i32 = 12;
    pub const RAW_BOTTOM: i32 = 13;

    /// The scroll axis implied by this gravity: arcs on the left/right edges scroll vertically.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Vertical,
            Self::Top | Self::Bottom => Orientation::Horizontal,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Left => Self::RAW_LEFT,
            Self::Right => Self::RAW_RIGHT,
            Self::Top => Self::RAW_TOP,
            Self::Bottom => Self::RAW_BOTTOM,
        }
    }
}

impl TryFrom<i32> for Gravity {
    type Error = ConfigError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::RAW_LEFT => Ok(Self::Left),
            Self::RAW_RIGHT => Ok(Self::Right),
            Self::RAW_TOP => Ok(Self::Top),
            Self::RAW_BOTTOM => Ok(Self::Bottom),
            other => Err(ConfigError::InvalidGravity(other)),
        }
    }
}

/// Which items are drawn on top of their neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZAlignment {
    LeftOnTop,
    RightOnTop,
    CenterOnTop,
}

impl ZAlignment {
    pub const RAW_LEFT_ON_TOP: i32 = 4;
    pub const RAW_RIGHT_ON_TOP: i32 = 5;
    pub const RAW_CENTER_ON_TOP: i32 = 6;

    pub fn raw(self) -> i32 {
        match self {
            Self::LeftOnTop => Self::RAW_LEFT_ON_TOP,
            Self::RightOnTop => Self::RAW_RIGHT_ON_TOP,
            Self::CenterOnTop => Self::RAW_CENTER_ON_TOP,
        }
    }
}

impl TryFrom<i32> for ZAlignment {
    type Error = ConfigError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::RAW_LEFT_ON_TOP => Ok(Self::LeftOnTop),
            Self::RAW_RIGHT_ON_TOP => Ok(Self::RightOnTop),
            Self::RAW_CENTER_ON_TOP => Ok(Self::CenterOnTop),
            other => Err(ConfigError::InvalidZAlignment(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Picks the component of a 2-D vector that lies on this scroll axis.
    pub fn main_axis(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Expands a main-axis scalar into an `(x, y)` pair.
    pub fn split(self, main: f32) -> (f32, f32) {
        match self {
            Self::Horizontal => (main, 0.0),
            Self::Vertical => (0.0, main),
        }
    }
}

/// Upper bound on how many items a layout pass places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxVisible {
    /// Only the removal bounds decide which items are laid out.
    #[default]
    DetermineByBounds,
    Count(usize),
}

impl MaxVisible {
    pub(crate) fn limit(self) -> Option<usize> {
        match self {
            Self::DetermineByBounds => None,
            Self::Count(n) => Some(n),
        }
    }
}

/// Target-offset range outside of which items are culled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemovalBounds {
    pub min_remove_offset: f32,
    pub max_remove_offset: f32,
}

impl RemovalBounds {
    pub fn new(min_remove_offset: f32, max_remove_offset: f32) -> Result<Self, ConfigError> {
        // NaN fails both comparisons and is rejected too.
        if !(min_remove_offset <= 0.0 && max_remove_offset >= 0.0) {
            return Err(ConfigError::InvalidRemovalBounds {
                min: min_remove_offset,
                max: max_remove_offset,
            });
        }
        Ok(Self {
            min_remove_offset,
            max_remove_offset,
        })
    }

    pub fn contains(&self, target_offset: f32) -> bool {
        target_offset >= self.min_remove_offset && target_offset <= self.max_remove_offset
    }
}

/// Per-item geometry, relative to the item's centered slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    /// Degrees in `[0, 360)`.
    pub rotation: f32,
    pub elevation: f32,
    pub scale: f32,
}

/// Size of one measured item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSize {
    /// Size along the scroll axis.
    pub main: f32,
    /// Size across the scroll axis.
    pub cross: f32,
}

/// Viewport geometry, in the same main/cross convention as [`ItemSize`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub main: f32,
    pub cross: f32,
}

/// Screen-space rectangle of a placed item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// A logical slot on the path.
///
/// `position` is unbounded in infinite mode; `index` is the backing data index it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub position: i64,
    pub index: usize,
}

/// An item selected by the visibility window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    pub slot: ItemSlot,
    pub target_offset: f32,
}

/// An item as handed to the render boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    pub slot: ItemSlot,
    pub target_offset: f32,
    pub transform: Transform,
    pub frame: Frame,
}

/// What a configuration change costs the current layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Invalidation {
    /// Nothing on screen changes.
    #[default]
    None,
    /// Items must be re-placed on the next layout pass.
    Relayout,
    /// All laid-out items are discarded and rebuilt.
    Rebuild,
}
