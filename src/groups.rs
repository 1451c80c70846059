//! Built-in formula groups.
//!
//! Each function returns a fresh [`FormulaGroup`] with its rule table. The
//! tables are fixed and validated by the tests at the bottom of this file.

use crate::curve;
use crate::group::{ConflictPolicy, FormulaGroup};
use crate::kinematics::{self as k, Motion};
use crate::lane_change::{self, Severity};
use crate::rule::Rule;
use crate::variable::{Domain, Unit, VarSpec};

pub const V_START: &str = "v_start";
pub const V_END: &str = "v_end";
pub const RATE: &str = "rate";
pub const DISTANCE: &str = "distance";
pub const DURATION: &str = "duration";
pub const SPEED: &str = "speed";
pub const CHORD: &str = "chord";
pub const HEIGHT: &str = "height";
pub const RADIUS: &str = "radius";
pub const WIDTH: &str = "width";
pub const LATERAL_ACCEL: &str = "lateral_accel";

/// Braking: `ve = va − a·t`.
pub fn deceleration() -> FormulaGroup {
    kinematic("deceleration", Motion::Deceleration)
}

/// Speeding up: `ve = va + a·t`.
pub fn acceleration() -> FormulaGroup {
    kinematic("acceleration", Motion::Acceleration)
}

fn kinematic(name: &str, m: Motion) -> FormulaGroup {
    let rate_label = match m {
        Motion::Deceleration => "Verzögerung",
        Motion::Acceleration => "Beschleunigung",
    };

    FormulaGroup::builder(name)
        .var(VarSpec::new(V_START, "Anfangsgeschwindigkeit", Unit::KilometersPerHour, Domain::NonNegative))
        .var(VarSpec::new(V_END, "Endgeschwindigkeit", Unit::KilometersPerHour, Domain::NonNegative))
        .var(VarSpec::new(RATE, rate_label, Unit::MetersPerSecondSquared, Domain::NonNegative))
        .var(VarSpec::new(DISTANCE, "Weg", Unit::Meters, Domain::NonNegative))
        .var(VarSpec::new(DURATION, "Zeit", Unit::Seconds, Domain::NonNegative))
        // v_start
        .rule(Rule::solve(V_START).from([V_END, RATE, DURATION])
            .with(move |x| k::v_start_from_end_rate_time(m, x[0], x[1], x[2])))
        .rule(Rule::solve(V_START).from([V_END, RATE, DISTANCE])
            .with(move |x| k::v_start_from_end_rate_distance(m, x[0], x[1], x[2])))
        .rule(Rule::solve(V_START).from([V_END, DISTANCE, DURATION])
            .with(|x| k::v_start_from_end_distance_time(x[0], x[1], x[2])))
        .rule(Rule::solve(V_START).from([RATE, DISTANCE, DURATION])
            .with(move |x| k::v_start_from_rate_distance_time(m, x[0], x[1], x[2])))
        // v_end
        .rule(Rule::solve(V_END).from([V_START, RATE, DURATION])
            .with(move |x| k::v_end_from_start_rate_time(m, x[0], x[1], x[2])))
        .rule(Rule::solve(V_END).from([V_START, RATE, DISTANCE])
            .with(move |x| k::v_end_from_start_rate_distance(m, x[0], x[1], x[2])))
        .rule(Rule::solve(V_END).from([V_START, DISTANCE, DURATION])
            .with(|x| k::v_end_from_start_distance_time(x[0], x[1], x[2])))
        .rule(Rule::solve(V_END).from([RATE, DISTANCE, DURATION])
            .with(move |x| k::v_end_from_rate_distance_time(m, x[0], x[1], x[2])))
        // rate
        .rule(Rule::solve(RATE).from([V_START, V_END, DURATION])
            .with(move |x| k::rate_from_speeds_time(m, x[0], x[1], x[2])))
        .rule(Rule::solve(RATE).from([V_START, V_END, DISTANCE])
            .with(move |x| k::rate_from_speeds_distance(m, x[0], x[1], x[2])))
        .rule(Rule::solve(RATE).from([V_START, DISTANCE, DURATION])
            .with(move |x| k::rate_from_start_distance_time(m, x[0], x[1], x[2])))
        .rule(Rule::solve(RATE).from([V_END, DISTANCE, DURATION])
            .with(move |x| k::rate_from_end_distance_time(m, x[0], x[1], x[2])))
        // distance
        .rule(Rule::solve(DISTANCE).from([V_START, V_END, DURATION])
            .with(|x| k::distance_from_speeds_time(x[0], x[1], x[2])))
        .rule(Rule::solve(DISTANCE).from([V_START, V_END, RATE])
            .with(move |x| k::distance_from_speeds_rate(m, x[0], x[1], x[2])))
        .rule(Rule::solve(DISTANCE).from([V_START, RATE, DURATION])
            .with(move |x| k::distance_from_start_rate_time(m, x[0], x[1], x[2])))
        .rule(Rule::solve(DISTANCE).from([V_END, RATE, DURATION])
            .with(move |x| k::distance_from_end_rate_time(m, x[0], x[1], x[2])))
        // duration
        .rule(Rule::solve(DURATION).from([V_START, V_END, RATE])
            .with(move |x| k::duration_from_speeds_rate(m, x[0], x[1], x[2])))
        .rule(Rule::solve(DURATION).from([V_START, V_END, DISTANCE])
            .with(|x| k::duration_from_speeds_distance(x[0], x[1], x[2])))
        .rule(Rule::solve(DURATION).from([V_START, RATE, DISTANCE])
            .with(move |x| k::duration_from_start_rate_distance(m, x[0], x[1], x[2])))
        .rule(Rule::solve(DURATION).from([V_END, RATE, DISTANCE])
            .with(move |x| k::duration_from_end_rate_distance(m, x[0], x[1], x[2])))
        .policy(ConflictPolicy::Exclusive)
        .max_populated(4)
        .build_unchecked()
}

/// Uniform motion: `s = v·t`.
pub fn constant_motion() -> FormulaGroup {
    FormulaGroup::builder("constant_motion")
        .var(VarSpec::new(SPEED, "Geschwindigkeit", Unit::KilometersPerHour, Domain::NonNegative))
        .var(VarSpec::new(DISTANCE, "Weg", Unit::Meters, Domain::NonNegative))
        .var(VarSpec::new(DURATION, "Zeit", Unit::Seconds, Domain::NonNegative))
        .rule(Rule::solve(SPEED).from([DISTANCE, DURATION]).with(|x| k::speed_from_distance_time(x[0], x[1])))
        .rule(Rule::solve(DISTANCE).from([SPEED, DURATION]).with(|x| k::distance_from_speed_time(x[0], x[1])))
        .rule(Rule::solve(DURATION).from([SPEED, DISTANCE]).with(|x| k::duration_from_speed_distance(x[0], x[1])))
        .policy(ConflictPolicy::Threshold)
        .max_populated(2)
        .build_unchecked()
}

/// Circular segment from chord, height and radius.
pub fn curve_geometry() -> FormulaGroup {
    FormulaGroup::builder("curve_geometry")
        .var(VarSpec::new(CHORD, "Sehnenlänge", Unit::Meters, Domain::Positive))
        .var(VarSpec::new(HEIGHT, "Pfeilhöhe", Unit::Meters, Domain::Positive).precision(3))
        .var(VarSpec::new(RADIUS, "Radius", Unit::Meters, Domain::Positive))
        .rule(Rule::solve(RADIUS).from([CHORD, HEIGHT]).with(|x| curve::radius_from_chord_height(x[0], x[1])))
        .rule(Rule::solve(HEIGHT).from([CHORD, RADIUS]).with(|x| curve::height_from_chord_radius(x[0], x[1])))
        .rule(Rule::solve(CHORD).from([RADIUS, HEIGHT]).with(|x| curve::chord_from_radius_height(x[0], x[1])))
        .policy(ConflictPolicy::Threshold)
        .max_populated(2)
        .build_unchecked()
}

/// Lateral offset, lateral acceleration and duration of a lane change.
pub fn lane_change(severity: Severity) -> FormulaGroup {
    let name = format!("lane_change_{}", severity.name());
    FormulaGroup::builder(name)
        .var(VarSpec::new(WIDTH, "Querversatz", Unit::Meters, Domain::Positive))
        .var(VarSpec::new(LATERAL_ACCEL, "Querbeschleunigung", Unit::MetersPerSecondSquared, Domain::Positive))
        .var(VarSpec::new(DURATION, "Zeit", Unit::Seconds, Domain::Positive))
        .rule(Rule::solve(DURATION).from([WIDTH, LATERAL_ACCEL])
            .with(move |x| lane_change::duration(severity, x[0], x[1])))
        .rule(Rule::solve(WIDTH).from([LATERAL_ACCEL, DURATION])
            .with(move |x| lane_change::width(severity, x[0], x[1])))
        .rule(Rule::solve(LATERAL_ACCEL).from([WIDTH, DURATION])
            .with(move |x| lane_change::lateral_accel(severity, x[0], x[1])))
        .policy(ConflictPolicy::Threshold)
        .max_populated(2)
        .build_unchecked()
}

/// Every built-in solvable group.
pub fn all() -> Vec<FormulaGroup> {
    vec![
        deceleration(),
        acceleration(),
        constant_motion(),
        curve_geometry(),
        lane_change(Severity::Normal),
        lane_change(Severity::Sharp),
    ]
}
