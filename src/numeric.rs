//! Numeric constants and helpers shared by the formula library.
//!
//! All formulas compute in SI units with full `f64` precision. Rounding
//! happens only at the display boundary via [`round_half_away`].

/// Gravitational acceleration used throughout the formulas (m/s²).
pub const G: f64 = 9.81;

/// Conversion factor between km/h and m/s.
pub const KMH_PER_MS: f64 = 3.6;

/// Convert a speed in km/h to m/s.
#[inline]
pub fn kmh_to_ms(v: f64) -> f64 {
    v / KMH_PER_MS
}

/// Convert a speed in m/s to km/h.
#[inline]
pub fn ms_to_kmh(v: f64) -> f64 {
    v * KMH_PER_MS
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Round to a fixed number of decimal places, halves away from zero.
///
/// # Examples
///
/// ```rust
/// use crashcalc::numeric::round_half_away;
///
/// assert_eq!(round_half_away(2.345, 2), 2.35);
/// assert_eq!(round_half_away(-2.5, 0), -3.0);
/// ```
pub fn round_half_away(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    let scaled = value * factor;
    // 2.345 is stored as 2.34499..., one ulp below the half
    let nudged = scaled + scaled * f64::EPSILON;
    nudged.round() / factor
}

/// Radicands this close below zero are rounding noise and taken as zero.
pub const RADICAND_TOLERANCE: f64 = 1e-9;

/// Square root that treats tiny negative radicands as zero.
///
/// Genuinely negative radicands still yield `NaN`, which the solver turns
/// into "no result".
#[inline]
pub fn sqrt_tol(radicand: f64) -> f64 {
    if radicand < 0.0 && radicand > -RADICAND_TOLERANCE {
        0.0
    } else {
        radicand.sqrt()
    }
}
