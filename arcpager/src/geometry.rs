//! Target offset → item geometry.
//!
//! A target offset is the signed path distance of an item from the center of the path. Every
//! shape maps it to a displacement from the item's centered slot, a rotation, an elevation used
//! for depth ordering, and a scale.

use crate::math::{cos_deg, sin_deg, wrap_degrees};
use crate::{Gravity, Orientation, PagerOptions, ShapeKind, Transform, ZAlignment};

/// Angular distance, in degrees, that maps to one unit of elevation on a circle.
pub const ELEVATION_SCALE: f32 = 72.0;

/// Geometry of one placement shape.
pub trait GeometryMapping {
    /// Displacement `(x, y)` from the centered slot.
    fn position(&self, target_offset: f32) -> (f32, f32);

    /// Rotation in degrees, normalized into `[0, 360)`.
    fn rotation(&self, target_offset: f32) -> f32;

    fn elevation(&self, target_offset: f32) -> f32;

    fn scale(&self, _target_offset: f32) -> f32 {
        1.0
    }

    fn transform(&self, target_offset: f32) -> Transform {
        let (x, y) = self.position(target_offset);
        Transform {
            x,
            y,
            rotation: self.rotation(target_offset),
            elevation: self.elevation(target_offset),
            scale: self.scale(target_offset),
        }
    }
}

/// A circle of `radius` tangent to the `gravity` edge; target offsets are degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub radius: f32,
    pub gravity: Gravity,
    pub flip_rotate: bool,
    pub z_alignment: ZAlignment,
}

impl GeometryMapping for Circle {
    fn position(&self, target_offset: f32) -> (f32, f32) {
        let r = self.radius;
        let theta = 90.0 - target_offset;
        let s = r * sin_deg(theta);
        let c = r * cos_deg(theta);
        match self.gravity {
            Gravity::Left => (s - r, c),
            Gravity::Right => (r - s, c),
            Gravity::Top => (c, s - r),
            Gravity::Bottom => (c, r - s),
        }
    }

    fn rotation(&self, target_offset: f32) -> f32 {
        // The leading edge keeps pointing along the arc whichever side it hugs.
        let along = match self.gravity {
            Gravity::Right | Gravity::Top => !self.flip_rotate,
            Gravity::Left | Gravity::Bottom => self.flip_rotate,
        };
        let degrees = if along {
            360.0 - target_offset
        } else {
            target_offset
        };
        wrap_degrees(degrees)
    }

    fn elevation(&self, target_offset: f32) -> f32 {
        match self.z_alignment {
            ZAlignment::LeftOnTop => (540.0 - target_offset) / ELEVATION_SCALE,
            ZAlignment::RightOnTop => (target_offset - 540.0) / ELEVATION_SCALE,
            ZAlignment::CenterOnTop => (360.0 - target_offset.abs()) / ELEVATION_SCALE,
        }
    }
}

/// A straight line through the viewport center; target offsets are pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub orientation: Orientation,
    pub interval: f32,
    pub min_scale: f32,
    pub z_alignment: ZAlignment,
}

impl Line {
    fn steps(&self, target_offset: f32) -> f32 {
        if self.interval > 0.0 {
            target_offset / self.interval
        } else {
            0.0
        }
    }
}

impl GeometryMapping for Line {
    fn position(&self, target_offset: f32) -> (f32, f32) {
        self.orientation.split(target_offset)
    }

    fn rotation(&self, _target_offset: f32) -> f32 {
        0.0
    }

    fn elevation(&self, target_offset: f32) -> f32 {
        let steps = self.steps(target_offset);
        match self.z_alignment {
            ZAlignment::LeftOnTop => -steps,
            ZAlignment::RightOnTop => steps,
            ZAlignment::CenterOnTop => -steps.abs(),
        }
    }

    fn scale(&self, target_offset: f32) -> f32 {
        let t = self.steps(target_offset).abs().min(1.0);
        1.0 - (1.0 - self.min_scale) * t
    }
}

/// The closed set of placement shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Circle(Circle),
    Line(Line),
}

impl Shape {
    /// Builds the shape described by `options`, using `radius` for circles.
    pub fn from_options(options: &PagerOptions, radius: f32) -> Self {
        match options.shape {
            ShapeKind::Circle => Self::Circle(Circle {
                radius,
                gravity: options.gravity,
                flip_rotate: options.flip_rotate,
                z_alignment: options.z_alignment,
            }),
            ShapeKind::Line { min_scale } => Self::Line(Line {
                orientation: options.orientation(),
                interval: options.interval,
                min_scale,
                z_alignment: options.z_alignment,
            }),
        }
    }
}

impl GeometryMapping for Shape {
    fn position(&self, target_offset: f32) -> (f32, f32) {
        match self {
            Self::Circle(c) => c.position(target_offset),
            Self::Line(l) => l.position(target_offset),
        }
    }

    fn rotation(&self, target_offset: f32) -> f32 {
        match self {
            Self::Circle(c) => c.rotation(target_offset),
            Self::Line(l) => l.rotation(target_offset),
        }
    }

    fn elevation(&self, target_offset: f32) -> f32 {
        match self {
            Self::Circle(c) => c.elevation(target_offset),
            Self::Line(l) => l.elevation(target_offset),
        }
    }

    fn scale(&self, target_offset: f32) -> f32 {
        match self {
            Self::Circle(c) => c.scale(target_offset),
            Self::Line(l) => l.scale(target_offset),
        }
    }
}
