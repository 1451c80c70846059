//! Kinematics example: solving a braking group from different field sets
//!
//! This example demonstrates:
//! - Picking the formula from whichever fields are filled
//! - Echo, indeterminate and error outcomes
//! - Formatting results for display
//!
//! Run with `RUST_LOG=crashcalc=debug` to see why a field shows an error.

use crashcalc::*;
use tracing_subscriber::EnvFilter;

fn show(solver: &Solver, inputs: &Inputs) -> Result<(), CalcError> {
    let opts = FormatOptions::default();
    for spec in solver.group().vars() {
        let outcome = solver.solve(inputs, &spec.id)?;
        let formula = outcome
            .formula()
            .map(|key| format!("  [{}]", key))
            .unwrap_or_default();
        println!(
            "  {:<24} {:>14}{}",
            spec.label,
            format_outcome(&outcome, spec, &opts),
            formula
        );
    }
    println!();
    Ok(())
}

fn main() -> Result<(), CalcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Braking ===\n");
    let solver = Solver::new(groups::deceleration());

    println!("1. Full stop from 100 km/h in 2.5 s\n");
    let inputs = Inputs::new()
        .with("v_start", 100.0)
        .with("v_end", 0.0)
        .with("duration", 2.5);
    show(&solver, &inputs)?;

    println!("2. Braking distance from speed and deceleration\n");
    let mut inputs = Inputs::new();
    inputs.set_text("v_start", "72");
    inputs.set_text("v_end", "0");
    inputs.set_text("rate", "7,5");
    show(&solver, &inputs)?;

    println!("3. Too few fields\n");
    show(&solver, &Inputs::new().with("v_start", 50.0))?;

    println!("4. One field too many\n");
    let inputs = Inputs::new()
        .with("v_start", 72.0)
        .with("v_end", 28.8)
        .with("rate", 4.0)
        .with("duration", 3.0);
    show(&solver, &inputs)?;

    println!("=== Constant motion ===\n");
    let solver = Solver::new(groups::constant_motion());
    show(&solver, &Inputs::new().with("speed", 50.0).with("duration", 1.0))?;

    Ok(())
}
