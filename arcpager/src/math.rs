//! Float helpers that work with either `std` or `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("arcpager requires either the `std` or the `libm` feature for float math");

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub(crate) fn sin(x: f32) -> f32 {
        x.sin()
    }
    #[inline]
    pub(crate) fn cos(x: f32) -> f32 {
        x.cos()
    }
    #[inline]
    pub(crate) fn round(x: f32) -> f32 {
        x.round()
    }
    #[inline]
    pub(crate) fn trunc(x: f32) -> f32 {
        x.trunc()
    }
    #[inline]
    pub(crate) fn exp(x: f64) -> f64 {
        x.exp()
    }
    #[inline]
    pub(crate) fn ln(x: f64) -> f64 {
        x.ln()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline]
    pub(crate) fn sin(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline]
    pub(crate) fn cos(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline]
    pub(crate) fn round(x: f32) -> f32 {
        libm::roundf(x)
    }
    #[inline]
    pub(crate) fn trunc(x: f32) -> f32 {
        libm::truncf(x)
    }
    #[inline]
    pub(crate) fn exp(x: f64) -> f64 {
        libm::exp(x)
    }
    #[inline]
    pub(crate) fn ln(x: f64) -> f64 {
        libm::log(x)
    }
}

pub(crate) use imp::{cos, exp, ln, round, sin, trunc};

/// Sine of an angle given in degrees.
#[inline]
pub(crate) fn sin_deg(degrees: f32) -> f32 {
    sin(degrees.to_radians())
}

/// Cosine of an angle given in degrees.
#[inline]
pub(crate) fn cos_deg(degrees: f32) -> f32 {
    cos(degrees.to_radians())
}

/// Normalizes an angle into `[0, 360)`.
#[inline]
pub(crate) fn wrap_degrees(degrees: f32) -> f32 {
    let r = degrees % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // Tiny negative inputs round up to exactly 360.
    if r >= 360.0 { 0.0 } else { r }
}
