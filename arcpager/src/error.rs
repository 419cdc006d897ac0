use thiserror::Error;

/// Rejected configuration values.
///
/// These are raised at the point of assignment, so invalid values never reach the geometry
/// functions.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("gravity must be one of LEFT, RIGHT, TOP and BOTTOM (got {0})")]
    InvalidGravity(i32),

    #[error("z alignment must be one of LEFT_ON_TOP, RIGHT_ON_TOP and CENTER_ON_TOP (got {0})")]
    InvalidZAlignment(i32),

    #[error("removal bounds must satisfy min <= 0 <= max (got min={min}, max={max})")]
    InvalidRemovalBounds { min: f32, max: f32 },

    #[error("interval must be positive and finite (got {0})")]
    InvalidInterval(f32),

    #[error("move speed must be finite and non-negative (got {0})")]
    InvalidMoveSpeed(f32),

    #[error("radius must be positive and finite (got {0})")]
    InvalidRadius(f32),
}
