//! Error types for the calculator core.
//!
//! Solving never fails with a `CalcError`: an under-determined or
//! conflicting input set is reported through
//! [`SolveOutcome`](crate::outcome::SolveOutcome). The variants here cover
//! misuse of the API (unknown variables, broken rule tables) and parsing at
//! the edges (field text, dates, session snapshots).

use crate::var_id::VarId;
use thiserror::Error;

/// Errors raised by the public API.
///
/// # Examples
///
/// ```rust
/// use crashcalc::{CalcError, VarId};
///
/// let err = CalcError::UnknownVariable(VarId::from_str("v_start"));
/// assert_eq!(err.to_string(), "Unknown variable: v_start");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The variable is not declared by the formula group.
    #[error("Unknown variable: {0}")]
    UnknownVariable(VarId),

    /// A solve was requested for a variable no rule of the group targets.
    #[error("No rule solves for {0}")]
    UnknownTarget(VarId),

    /// A rule is inconsistent with the group it belongs to.
    #[error("Invalid rule for {target}: {reason}")]
    InvalidRule { target: VarId, reason: String },

    /// Two rules share the same target and input combination.
    #[error("Duplicate rule: {0}")]
    DuplicateRule(String),

    /// Field text could not be read as a number.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// A calendar date could not be parsed.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A session snapshot could not be read or written.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::UnknownTarget(VarId::from_str("rate"));
        assert!(err.to_string().contains("rate"));
    }

    #[test]
    fn test_invalid_rule_display() {
        let err = CalcError::InvalidRule {
            target: VarId::from_str("duration"),
            reason: "target listed as input".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("duration"));
        assert!(display.contains("target listed as input"));
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CalcError = parse_err.into();
        assert!(matches!(err, CalcError::Snapshot(_)));
    }
}
