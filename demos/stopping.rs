//! Stopping example: forward calculations of a reconstruction report
//!
//! This example demonstrates:
//! - The three-phase stopping sequence
//! - Curve limit speed from a measured chord and height
//! - Lane change durations for both severities

use crashcalc::curve;
use crashcalc::lane_change;
use crashcalc::stopping::StoppingInput;
use crashcalc::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CalcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = FormatOptions::from_json(r#"{ "decimal_separator": "," }"#)?;
    let n = |value: f64| format_number(value, 2, &opts);

    println!("=== Stopping sequence ===\n");
    let input = StoppingInput {
        v_start: 50.0,
        v_end: 0.0,
        reaction_time: 0.8,
        threshold_time: 0.2,
        mean_decel: 7.5,
    };
    match input.compute() {
        Some(seq) => {
            println!("  Reaction distance:   {} m", n(seq.reaction_distance));
            println!("  Threshold distance:  {} m", n(seq.threshold_distance));
            println!("  Full-braking onset:  {} km/h", n(seq.onset_speed));
            println!("  Braking distance:    {} m", n(seq.braking_distance));
            println!("  Stopping distance:   {} m", n(seq.total_distance));
            println!("  Stopping time:       {} s\n", n(seq.total_duration));
        }
        None => println!("  no result\n"),
    }

    println!("=== Curve ===\n");
    match curve::segment(30.0, 1.5) {
        Some(seg) => {
            println!("  Radius:       {} m", n(seg.radius));
            println!("  Arc length:   {} m", n(seg.arc_length));
            match curve::limit_speed(seg.radius, 0.8, 2.5) {
                Some(v) => println!("  Limit speed:  {} km/h\n", n(v)),
                None => println!("  Limit speed:  {}\n", opts.indeterminate),
            }
        }
        None => println!("  no result\n"),
    }

    println!("=== Lane change (3.5 m at 3 m/s², 80 km/h) ===\n");
    if let Some(lc) = lane_change::evaluate(3.5, 3.0, 80.0) {
        println!("  Normal: {} s over {} m", n(lc.normal.duration), n(lc.normal.distance));
        println!("  Sharp:  {} s over {} m", n(lc.sharp.duration), n(lc.sharp.distance));
    }

    Ok(())
}
