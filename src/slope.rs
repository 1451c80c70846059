//! Road grade.
//!
//! Converts between inclination angle and percent grade and derives the
//! downhill component of gravity. Either quantity may drive the
//! computation; when both are usable the angle wins.

use crate::numeric::{deg_to_rad, rad_to_deg, G};
use serde::{Deserialize, Serialize};

/// Legal inclination angles in degrees.
pub const ANGLE_RANGE: (f64, f64) = (0.0, 90.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slope {
    pub angle_deg: f64,
    pub grade_percent: f64,
    /// `g·sin(angle)` in m/s².
    pub downhill_decel: f64,
}

/// Percent grade of an inclination angle.
pub fn grade_from_angle(angle_deg: f64) -> f64 {
    deg_to_rad(angle_deg).tan() * 100.0
}

/// Inclination angle of a percent grade.
pub fn angle_from_grade(grade_percent: f64) -> f64 {
    rad_to_deg((grade_percent / 100.0).atan())
}

/// Gravity component along the slope.
pub fn downhill_decel(angle_deg: f64) -> f64 {
    G * deg_to_rad(angle_deg).sin()
}

fn usable_angle(angle: f64) -> bool {
    // 90° has no finite grade
    angle.is_finite() && angle >= ANGLE_RANGE.0 && angle < ANGLE_RANGE.1
}

fn usable_grade(grade: f64) -> bool {
    grade.is_finite() && grade >= 0.0
}

/// Evaluate the slope from whichever input is usable.
///
/// # Examples
///
/// ```rust
/// use crashcalc::slope::evaluate;
///
/// let slope = evaluate(None, Some(100.0)).unwrap();
/// assert!((slope.angle_deg - 45.0).abs() < 1e-9);
///
/// // Angle takes precedence over grade.
/// let slope = evaluate(Some(0.0), Some(100.0)).unwrap();
/// assert_eq!(slope.grade_percent, 0.0);
///
/// assert!(evaluate(None, None).is_none());
/// ```
pub fn evaluate(angle_deg: Option<f64>, grade_percent: Option<f64>) -> Option<Slope> {
    let angle_deg = angle_deg.filter(|a| usable_angle(*a));
    let grade_percent = grade_percent.filter(|g| usable_grade(*g));

    let angle = match (angle_deg, grade_percent) {
        (Some(angle), _) => angle,
        (None, Some(grade)) => angle_from_grade(grade),
        (None, None) => return None,
    };

    Some(Slope {
        angle_deg: angle,
        grade_percent: grade_from_angle(angle),
        downhill_decel: downhill_decel(angle),
    })
}
