//! Solve outcomes.
//!
//! A `SolveOutcome` is derived from the current inputs on every call and
//! never stored. It tells the presentation layer what to show for one
//! target field: a computed value with the formula that produced it, the
//! value the user typed, a placeholder, or an error marker.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier of a formula within a group.
///
/// Keys have the shape `group.target(input1,input2,...)` and double as the
/// name of the matching formula diagram.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormulaKey(#[serde(with = "crate::var_id::interned")] Arc<str>);

impl FormulaKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormulaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of solving one target variable.
///
/// # Examples
///
/// ```rust
/// use crashcalc::{FormulaKey, SolveOutcome};
///
/// let outcome = SolveOutcome::Resolved {
///     value: 11.11,
///     formula: FormulaKey::new("deceleration.rate(v_start,v_end,duration)"),
/// };
/// assert_eq!(outcome.value(), Some(11.11));
/// assert!(!outcome.is_error());
/// assert_eq!(SolveOutcome::Indeterminate.value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Exactly one rule fired.
    Resolved { value: f64, formula: FormulaKey },
    /// The target was entered directly and no rule fired.
    Echo { value: f64 },
    /// Not enough inputs, or the selected formula had no valid result.
    Indeterminate,
    /// The inputs over-determine the group.
    Error,
}

impl SolveOutcome {
    /// The value to display, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            SolveOutcome::Resolved { value, .. } | SolveOutcome::Echo { value } => Some(*value),
            SolveOutcome::Indeterminate | SolveOutcome::Error => None,
        }
    }

    /// The formula used, for resolved outcomes.
    pub fn formula(&self) -> Option<&FormulaKey> {
        match self {
            SolveOutcome::Resolved { formula, .. } => Some(formula),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SolveOutcome::Resolved { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SolveOutcome::Error)
    }
}
