//! Curve geometry and curve limit speed.

use crate::numeric::{rad_to_deg, sqrt_tol, G, KMH_PER_MS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Circular segment measured on site by chord and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularSegment {
    pub radius: f64,
    pub central_angle_deg: f64,
    pub arc_length: f64,
}

/// `R = s²/(8h) + h/2`
pub fn radius_from_chord_height(chord: f64, height: f64) -> f64 {
    chord * chord / (8.0 * height) + height / 2.0
}

/// `h = R − √(R² − s²/4)`
pub fn height_from_chord_radius(chord: f64, radius: f64) -> f64 {
    radius - sqrt_tol(radius * radius - chord * chord / 4.0)
}

/// `s = 2·√(2Rh − h²)`
pub fn chord_from_radius_height(radius: f64, height: f64) -> f64 {
    2.0 * sqrt_tol(2.0 * radius * height - height * height)
}

/// Central angle in radians, `θ = 2·asin(s / 2R)`.
///
/// Always the minor-arc angle, at most π.
pub fn central_angle(chord: f64, radius: f64) -> f64 {
    2.0 * (chord / (2.0 * radius)).asin()
}

/// Evaluate the segment from chord and height, both in metres.
///
/// Only minor segments (`height ≤ radius`) are described correctly. For a
/// height above the radius the central angle and arc length are still
/// those of the minor arc: chord 10 m with height 8 m reports about 128°
/// where the measured segment spans about 232°.
///
/// # Examples
///
/// ```rust
/// use crashcalc::curve::segment;
///
/// // Half circle of radius 5: chord 10, height 5.
/// let seg = segment(10.0, 5.0).unwrap();
/// assert!((seg.radius - 5.0).abs() < 1e-9);
/// assert!((seg.central_angle_deg - 180.0).abs() < 1e-6);
/// ```
pub fn segment(chord: f64, height: f64) -> Option<CircularSegment> {
    if chord <= 0.0 || height <= 0.0 {
        return None;
    }
    let radius = radius_from_chord_height(chord, height);
    let theta = central_angle(chord, radius);
    let seg = CircularSegment {
        radius,
        central_angle_deg: rad_to_deg(theta),
        arc_length: radius * theta,
    };
    (seg.radius.is_finite() && seg.arc_length.is_finite()).then_some(seg)
}

/// Limit speed in km/h for a curve of `radius` m, friction coefficient `mu`
/// and banking in percent.
///
/// `v = 3.6·√(g·R·(μ + e)/(1 − μ·e))`; a non-positive denominator has no
/// valid speed.
///
/// # Examples
///
/// ```rust
/// use crashcalc::curve::limit_speed;
///
/// let v = limit_speed(100.0, 0.8, 0.0).unwrap();
/// assert!((v - 3.6 * (9.81_f64 * 100.0 * 0.8).sqrt()).abs() < 1e-9);
///
/// assert!(limit_speed(100.0, 2.0, 60.0).is_none());
/// ```
pub fn limit_speed(radius: f64, mu: f64, banking_percent: f64) -> Option<f64> {
    let e = banking_percent / 100.0;
    let denominator = 1.0 - mu * e;
    if denominator <= 0.0 {
        debug!(mu, e, "curve limit speed denominator not positive");
        return None;
    }
    let radicand = G * radius * (mu + e) / denominator;
    if radicand.is_nan() || radicand < 0.0 {
        return None;
    }
    let v = KMH_PER_MS * radicand.sqrt();
    v.is_finite().then_some(v)
}
