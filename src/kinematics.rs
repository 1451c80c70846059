//! Constant-acceleration kinematics.
//!
//! Closed-form relations among start speed `va`, end speed `ve`, rate `a`,
//! distance `s` and duration `t`, all in SI units. The rate is always a
//! non-negative magnitude; [`Motion`] decides whether it slows the vehicle
//! down or speeds it up, so each function serves both mirror cases:
//!
//! ```text
//! ve = va ∓ a·t        s = (va + ve)/2 · t        s = va·t ∓ ½·a·t²
//! ```

use crate::numeric::sqrt_tol;
use serde::{Deserialize, Serialize};

/// Direction of the constant acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    Deceleration,
    Acceleration,
}

impl Motion {
    /// `-1` when braking, `+1` when accelerating.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Motion::Deceleration => -1.0,
            Motion::Acceleration => 1.0,
        }
    }
}

// start speed

pub fn v_start_from_end_rate_time(m: Motion, ve: f64, a: f64, t: f64) -> f64 {
    ve - m.sign() * a * t
}

pub fn v_start_from_end_rate_distance(m: Motion, ve: f64, a: f64, s: f64) -> f64 {
    sqrt_tol(ve * ve - 2.0 * m.sign() * a * s)
}

pub fn v_start_from_end_distance_time(ve: f64, s: f64, t: f64) -> f64 {
    2.0 * s / t - ve
}

pub fn v_start_from_rate_distance_time(m: Motion, a: f64, s: f64, t: f64) -> f64 {
    (s - 0.5 * m.sign() * a * t * t) / t
}

// end speed

pub fn v_end_from_start_rate_time(m: Motion, va: f64, a: f64, t: f64) -> f64 {
    va + m.sign() * a * t
}

pub fn v_end_from_start_rate_distance(m: Motion, va: f64, a: f64, s: f64) -> f64 {
    sqrt_tol(va * va + 2.0 * m.sign() * a * s)
}

pub fn v_end_from_start_distance_time(va: f64, s: f64, t: f64) -> f64 {
    2.0 * s / t - va
}

pub fn v_end_from_rate_distance_time(m: Motion, a: f64, s: f64, t: f64) -> f64 {
    (s + 0.5 * m.sign() * a * t * t) / t
}

// rate

pub fn rate_from_speeds_time(m: Motion, va: f64, ve: f64, t: f64) -> f64 {
    m.sign() * (ve - va) / t
}

pub fn rate_from_speeds_distance(m: Motion, va: f64, ve: f64, s: f64) -> f64 {
    m.sign() * (ve * ve - va * va) / (2.0 * s)
}

pub fn rate_from_start_distance_time(m: Motion, va: f64, s: f64, t: f64) -> f64 {
    2.0 * m.sign() * (s - va * t) / (t * t)
}

pub fn rate_from_end_distance_time(m: Motion, ve: f64, s: f64, t: f64) -> f64 {
    2.0 * m.sign() * (ve * t - s) / (t * t)
}

// distance

pub fn distance_from_speeds_time(va: f64, ve: f64, t: f64) -> f64 {
    (va + ve) / 2.0 * t
}

pub fn distance_from_speeds_rate(m: Motion, va: f64, ve: f64, a: f64) -> f64 {
    m.sign() * (ve * ve - va * va) / (2.0 * a)
}

pub fn distance_from_start_rate_time(m: Motion, va: f64, a: f64, t: f64) -> f64 {
    va * t + 0.5 * m.sign() * a * t * t
}

pub fn distance_from_end_rate_time(m: Motion, ve: f64, a: f64, t: f64) -> f64 {
    ve * t - 0.5 * m.sign() * a * t * t
}

// duration

pub fn duration_from_speeds_rate(m: Motion, va: f64, ve: f64, a: f64) -> f64 {
    m.sign() * (ve - va) / a
}

pub fn duration_from_speeds_distance(va: f64, ve: f64, s: f64) -> f64 {
    2.0 * s / (va + ve)
}

/// Smaller non-negative root of `s = va·t ∓ ½·a·t²`, the first time the
/// distance is reached.
pub fn duration_from_start_rate_distance(m: Motion, va: f64, a: f64, s: f64) -> f64 {
    if a == 0.0 {
        return s / va;
    }
    let k = m.sign();
    (-va + sqrt_tol(va * va + 2.0 * k * a * s)) / (k * a)
}

/// Non-negative root of `s = ve·t ± ½·a·t²`.
pub fn duration_from_end_rate_distance(m: Motion, ve: f64, a: f64, s: f64) -> f64 {
    if a == 0.0 {
        return s / ve;
    }
    let k = m.sign();
    (ve - sqrt_tol(ve * ve - 2.0 * k * a * s)) / (k * a)
}

// constant motion

pub fn speed_from_distance_time(s: f64, t: f64) -> f64 {
    s / t
}

pub fn distance_from_speed_time(v: f64, t: f64) -> f64 {
    v * t
}

pub fn duration_from_speed_distance(v: f64, s: f64) -> f64 {
    s / v
}
