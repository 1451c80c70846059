//! Lane change (Ausschervorgang).
//!
//! The lateral offset `y` is covered under a limited lateral acceleration
//! `a_q`. A normal manoeuvre follows a sinusoidal path, a sharp one two
//! arcs of constant lateral acceleration; both give
//! `t = f·√(y / a_q)` with a severity factor `f`.

use crate::numeric::kmh_to_ms;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Sharp,
}

impl Severity {
    pub fn factor(self) -> f64 {
        match self {
            Severity::Normal => (2.0 * PI).sqrt(),
            Severity::Sharp => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Sharp => "sharp",
        }
    }
}

pub fn duration(severity: Severity, width: f64, lateral_accel: f64) -> f64 {
    severity.factor() * (width / lateral_accel).sqrt()
}

pub fn width(severity: Severity, lateral_accel: f64, duration: f64) -> f64 {
    let ratio = duration / severity.factor();
    lateral_accel * ratio * ratio
}

pub fn lateral_accel(severity: Severity, width: f64, duration: f64) -> f64 {
    let ratio = severity.factor() / duration;
    width * ratio * ratio
}

/// Distance travelled during the manoeuvre, speed in m/s.
pub fn distance(speed: f64, duration: f64) -> f64 {
    speed * duration
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Manoeuvre {
    pub duration: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneChange {
    pub normal: Manoeuvre,
    pub sharp: Manoeuvre,
}

/// Both severities for a lateral offset, lateral acceleration and a speed
/// in km/h.
///
/// # Examples
///
/// ```rust
/// use crashcalc::lane_change::evaluate;
///
/// let lc = evaluate(3.5, 3.5, 72.0).unwrap();
/// assert!((lc.sharp.duration - 2.0).abs() < 1e-12);
/// assert!((lc.sharp.distance - 40.0).abs() < 1e-9);
/// assert!(lc.normal.duration > lc.sharp.duration);
/// ```
pub fn evaluate(width: f64, lateral_accel: f64, speed_kmh: f64) -> Option<LaneChange> {
    if width < 0.0 || lateral_accel <= 0.0 || speed_kmh < 0.0 {
        return None;
    }
    let v = kmh_to_ms(speed_kmh);
    let manoeuvre = |severity: Severity| {
        let t = duration(severity, width, lateral_accel);
        Manoeuvre {
            duration: t,
            distance: distance(v, t),
        }
    };
    let result = LaneChange {
        normal: manoeuvre(Severity::Normal),
        sharp: manoeuvre(Severity::Sharp),
    };
    (result.normal.distance.is_finite() && result.sharp.distance.is_finite()).then_some(result)
}
