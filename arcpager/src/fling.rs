use crate::math;

const GRAVITY_EARTH: f64 = 9.80665;
const INCHES_PER_METER: f64 = 39.37;
const INFLEXION: f64 = 0.35;

/// Spline deceleration model for fling distances.
///
/// The total distance grows sub-linearly with the initial velocity and depends on `friction`
/// and the screen density, which sets how many pixels one physical inch covers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingModel {
    pub friction: f32,
    pub density_dpi: f32,
}

impl Default for FlingModel {
    fn default() -> Self {
        Self {
            friction: 0.015,
            density_dpi: 160.0,
        }
    }
}

impl FlingModel {
    pub fn new(friction: f32, density_dpi: f32) -> Self {
        Self {
            friction,
            density_dpi,
        }
    }

    fn physical_coeff(&self) -> f64 {
        GRAVITY_EARTH * INCHES_PER_METER * self.density_dpi as f64 * 0.84
    }

    fn deceleration_rate() -> f64 {
        math::ln(0.78) / math::ln(0.9)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        let speed = (velocity as f64).abs();
        math::ln(INFLEXION * speed / (self.friction as f64 * self.physical_coeff()))
    }

    /// Signed distance a fling started at `velocity` (units per second) travels before stopping.
    pub fn distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0.0;
        }
        let rate = Self::deceleration_rate();
        let l = self.spline_deceleration(velocity);
        let scale = self.friction as f64 * self.physical_coeff();
        let total = scale * math::exp(rate / (rate - 1.0) * l);
        let total = math::round(total as f32);
        if velocity < 0.0 { -total } else { total }
    }

    /// How long the fling takes to come to rest.
    pub fn duration_ms(&self, velocity: f32) -> u64 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0;
        }
        let rate = Self::deceleration_rate();
        let l = self.spline_deceleration(velocity);
        (1000.0 * math::exp(l / (rate - 1.0))) as u64
    }
}
