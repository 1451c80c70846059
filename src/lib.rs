//! # crashcalc - Formula Selection and Solving for Accident Reconstruction
//!
//! A calculation core for traffic-accident reconstruction and vehicle value
//! diminution:
//! - **Formula groups** tie a handful of physical variables together
//! - **Any subset** of variables may be entered; the engine picks the one
//!   formula that fits
//! - **Stateless** solving: outcomes are recomputed from the inputs on
//!   every call
//! - **Forward calculations** for stopping sequences, road grade, curves,
//!   lane changes and market value diminution
//!
//! ## Core Concepts
//!
//! ```text
//! [Inputs] → [classify] → [Rule] → [SolveOutcome] → [format]
//! ```
//!
//! 1. **Inputs** hold the field values; out-of-domain values count as unset
//! 2. **Classification** finds the unique rule whose inputs are populated
//! 3. **SolveOutcome** is a value with its formula key, an echo of the
//!    entered value, "indeterminate" or an error marker
//!
//! ## Example
//!
//! ```rust
//! use crashcalc::*;
//!
//! let solver = Solver::new(groups::deceleration());
//! let inputs = Inputs::new()
//!     .with("v_start", 100.0)
//!     .with("v_end", 0.0)
//!     .with("duration", 2.5);
//!
//! let rate = solver.solve(&inputs, &VarId::from_str("rate")).unwrap();
//! let spec = solver.group().var(&VarId::from_str("rate")).unwrap();
//! assert_eq!(format_outcome(&rate, spec, &FormatOptions::default()), "11,11 m/s²");
//! ```
//!
//! ## Modules
//!
//! - [`groups`] - Built-in formula groups
//! - [`solver`] - Solver dispatcher
//! - [`classifier`] - Variable-set classifier
//! - [`kinematics`], [`curve`], [`lane_change`] - Closed-form formulas
//! - [`stopping`], [`slope`], [`depreciation`], [`age`] - Forward calculations
//! - [`format`] - Display formatting
//! - [`store`] - Field persistence port
//! - [`error`] - Error types

pub mod age;
pub mod classifier;
pub mod curve;
pub mod depreciation;
pub mod error;
pub mod format;
pub mod group;
pub mod groups;
pub mod inputs;
pub mod kinematics;
pub mod lane_change;
pub mod numeric;
pub mod outcome;
pub mod rule;
pub mod slope;
pub mod solver;
pub mod stopping;
pub mod store;
pub mod var_id;
pub mod variable;

// Re-export main types for convenience
pub use error::CalcError;
pub use format::{format_number, format_outcome, format_quantity, FormatOptions};
pub use group::{ConflictPolicy, FormulaGroup, GroupBuilder};
pub use inputs::{parse_field, Inputs};
pub use outcome::{FormulaKey, SolveOutcome};
pub use rule::Rule;
pub use solver::Solver;
pub use var_id::VarId;
pub use variable::{Domain, Unit, VarSpec};
