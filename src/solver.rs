//! Solver dispatcher.
//!
//! `Solver` binds one [`FormulaGroup`] and turns a classification into a
//! [`SolveOutcome`]. Nothing is cached: every call re-reads the inputs, so
//! the outcome always reflects the current field values.

use crate::classifier::{classify, Classification};
use crate::error::CalcError;
use crate::group::FormulaGroup;
use crate::inputs::Inputs;
use crate::outcome::SolveOutcome;
use crate::rule::Rule;
use crate::var_id::VarId;
use crate::variable::VarSpec;
use tracing::{debug, trace};

/// Results closer to zero than this are reported as exactly zero.
pub const ZERO_SNAP: f64 = 1e-9;

/// Solves the variables of one formula group.
///
/// # Examples
///
/// ```rust
/// use crashcalc::{groups, Inputs, SolveOutcome, Solver, VarId};
///
/// let solver = Solver::new(groups::deceleration());
/// let inputs = Inputs::new()
///     .with("v_start", 100.0)
///     .with("v_end", 0.0)
///     .with("duration", 2.5);
///
/// let outcome = solver.solve(&inputs, &VarId::from_str("rate")).unwrap();
/// assert!((outcome.value().unwrap() - 11.11).abs() < 0.01);
/// assert_eq!(
///     outcome.formula().unwrap().as_str(),
///     "deceleration.rate(v_start,v_end,duration)"
/// );
///
/// let echo = solver.solve(&inputs, &VarId::from_str("duration")).unwrap();
/// assert_eq!(echo, SolveOutcome::Echo { value: 2.5 });
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    group: FormulaGroup,
}

impl Solver {
    pub fn new(group: FormulaGroup) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &FormulaGroup {
        &self.group
    }

    /// Solve one target.
    ///
    /// Fails only when `target` is not declared by the group, or no rule
    /// of the group solves for it.
    pub fn solve(&self, inputs: &Inputs, target: &VarId) -> Result<SolveOutcome, CalcError> {
        let spec = self
            .group
            .var(target)
            .ok_or_else(|| CalcError::UnknownVariable(target.clone()))?;
        if !self.group.is_target(target) {
            return Err(CalcError::UnknownTarget(target.clone()));
        }

        let outcome = match classify(&self.group, inputs, target) {
            Classification::Unique(rule) => self.evaluate(rule, spec, inputs),
            Classification::Echo(value) => SolveOutcome::Echo { value },
            Classification::Indeterminate => SolveOutcome::Indeterminate,
            Classification::Conflict => SolveOutcome::Error,
        };
        trace!(group = self.group.name(), target = %target, ?outcome, "solved");
        Ok(outcome)
    }

    /// Solve every target of the group, in declaration order.
    pub fn solve_all(&self, inputs: &Inputs) -> Vec<(VarId, SolveOutcome)> {
        self.group
            .vars()
            .iter()
            .filter(|spec| self.group.is_target(&spec.id))
            .filter_map(|spec| {
                self.solve(inputs, &spec.id)
                    .ok()
                    .map(|outcome| (spec.id.clone(), outcome))
            })
            .collect()
    }

    fn evaluate(&self, rule: &Rule, spec: &VarSpec, inputs: &Inputs) -> SolveOutcome {
        let mut args = Vec::with_capacity(rule.inputs().len());
        for id in rule.inputs() {
            // The classifier only selects rules whose inputs are usable.
            let Some(input_spec) = self.group.var(id) else {
                return SolveOutcome::Indeterminate;
            };
            let Some(value) = inputs.usable(input_spec) else {
                return SolveOutcome::Indeterminate;
            };
            args.push(input_spec.unit.to_si(value));
        }

        let mut raw = rule.evaluate(&args);
        if raw.abs() < ZERO_SNAP {
            raw = 0.0;
        }
        let value = spec.unit.from_si(raw);

        if !spec.accepts(value) {
            debug!(
                formula = %rule.key(),
                value,
                "formula result outside the target's domain"
            );
            return SolveOutcome::Indeterminate;
        }

        SolveOutcome::Resolved {
            value,
            formula: rule.key().clone(),
        }
    }
}
