use crate::{ConfigError, Gravity, MaxVisible, Orientation, RemovalBounds, ZAlignment};

/// Default radius of the circular path.
pub const DEFAULT_RADIUS: f32 = 1480.0;
/// Default angle between adjacent items, in degrees.
pub const DEFAULT_INTERVAL: f32 = 30.0;
/// Default finger distance per unit of offset.
pub const DEFAULT_DISTANCE_RATIO: f32 = 10.0;
pub const DEFAULT_MAX_REMOVE_OFFSET: f32 = 90.0;
pub const DEFAULT_MIN_REMOVE_OFFSET: f32 = -90.0;

/// The family of path an item sequence is laid out on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Items sit on a circle tangent to the `gravity` edge. Offsets are degrees.
    #[default]
    Circle,
    /// Items sit on a straight line through the viewport center. Offsets are pixels.
    ///
    /// `min_scale` is the scale of an item one interval away from the center.
    Line { min_scale: f32 },
}

/// Configuration for [`crate::Pager`].
///
/// Construct once, then change single fields through the `Pager::set_*` methods so that only the
/// layout aspects a field affects get invalidated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerOptions {
    pub shape: ShapeKind,
    /// Circle radius. `None` derives it from the cross-axis size of item 0 on the first layout.
    pub radius: Option<f32>,
    /// Path distance between adjacent item centers.
    pub interval: f32,
    /// Offset units per unit of finger travel. Zero freezes drag response.
    pub move_speed: f32,
    pub max_remove_offset: f32,
    pub min_remove_offset: f32,
    pub gravity: Gravity,
    pub flip_rotate: bool,
    pub z_alignment: ZAlignment,
    pub reverse_layout: bool,
    pub max_visible_item_count: MaxVisible,
    /// Distance between an item's far edge and the viewport's cross-axis end.
    ///
    /// `None` centers items on the cross axis.
    pub distance_to_bottom: Option<f32>,
    pub infinite: bool,
    /// Orders the visible set nearest-first instead of by position.
    pub bring_center_to_front: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PagerOptions {
    /// Options for a circular pager hugging the bottom edge.
    pub fn new() -> Self {
        Self {
            shape: ShapeKind::Circle,
            radius: Some(DEFAULT_RADIUS),
            interval: DEFAULT_INTERVAL,
            move_speed: 1.0 / DEFAULT_DISTANCE_RATIO,
            max_remove_offset: DEFAULT_MAX_REMOVE_OFFSET,
            min_remove_offset: DEFAULT_MIN_REMOVE_OFFSET,
            gravity: Gravity::Bottom,
            flip_rotate: false,
            z_alignment: ZAlignment::CenterOnTop,
            reverse_layout: false,
            max_visible_item_count: MaxVisible::DetermineByBounds,
            distance_to_bottom: None,
            infinite: false,
            bring_center_to_front: true,
        }
    }

    /// Options for a straight pager with pixel offsets.
    pub fn line(interval: f32, min_scale: f32) -> Self {
        Self {
            shape: ShapeKind::Line { min_scale },
            interval,
            move_speed: 1.0,
            max_remove_offset: interval * 2.0,
            min_remove_offset: -interval * 2.0,
            ..Self::new()
        }
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_radius(mut self, radius: Option<f32>) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_remove_offsets(mut self, min_remove_offset: f32, max_remove_offset: f32) -> Self {
        self.min_remove_offset = min_remove_offset;
        self.max_remove_offset = max_remove_offset;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_flip_rotate(mut self, flip_rotate: bool) -> Self {
        self.flip_rotate = flip_rotate;
        self
    }

    pub fn with_z_alignment(mut self, z_alignment: ZAlignment) -> Self {
        self.z_alignment = z_alignment;
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_max_visible_item_count(mut self, max_visible: MaxVisible) -> Self {
        self.max_visible_item_count = max_visible;
        self
    }

    pub fn with_distance_to_bottom(mut self, distance_to_bottom: Option<f32>) -> Self {
        self.distance_to_bottom = distance_to_bottom;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_bring_center_to_front(mut self, enabled: bool) -> Self {
        self.bring_center_to_front = enabled;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.gravity.orientation()
    }

    pub fn removal_bounds(&self) -> Result<RemovalBounds, ConfigError> {
        RemovalBounds::new(self.min_remove_offset, self.max_remove_offset)
    }

    /// Finger distance per unit of offset.
    ///
    /// Saturates to `f32::MAX` when `move_speed` is zero instead of dividing by zero.
    pub fn distance_ratio(&self) -> f32 {
        distance_ratio(self.move_speed)
    }

    /// Checks every field that has a restricted domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_interval(self.interval)?;
        validate_move_speed(self.move_speed)?;
        if let Some(radius) = self.radius {
            validate_radius(radius)?;
        }
        self.removal_bounds()?;
        Ok(())
    }
}

pub(crate) fn distance_ratio(move_speed: f32) -> f32 {
    let ratio = 1.0 / move_speed;
    if ratio.is_finite() { ratio } else { f32::MAX }
}

pub(crate) fn validate_interval(interval: f32) -> Result<(), ConfigError> {
    if interval.is_finite() && interval > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidInterval(interval))
    }
}

pub(crate) fn validate_move_speed(move_speed: f32) -> Result<(), ConfigError> {
    if move_speed.is_finite() && move_speed >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMoveSpeed(move_speed))
    }
}

pub(crate) fn validate_radius(radius: f32) -> Result<(), ConfigError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius(radius))
    }
}
