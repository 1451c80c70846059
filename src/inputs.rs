//! Field values of a formula group.
//!
//! `Inputs` is the record the presentation layer fills from its form
//! controls. Each field is either a number or explicitly unset; zero is a
//! legitimate value. Whether a stored value is *usable* depends on the
//! variable's domain and is decided against a [`VarSpec`], so an
//! out-of-range entry simply behaves like a blank field.

use crate::error::CalcError;
use crate::group::FormulaGroup;
use crate::var_id::VarId;
use crate::variable::VarSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Parse form text into a field value.
///
/// Blank text is `Ok(None)`. Both `,` and `.` are accepted as decimal
/// separator. Anything else, including `NaN` and infinities, is an error.
///
/// # Examples
///
/// ```rust
/// use crashcalc::parse_field;
///
/// assert_eq!(parse_field("  ").unwrap(), None);
/// assert_eq!(parse_field("12,5").unwrap(), Some(12.5));
/// assert_eq!(parse_field("0").unwrap(), Some(0.0));
/// assert!(parse_field("abc").is_err());
/// ```
pub fn parse_field(text: &str) -> Result<Option<f64>, CalcError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CalcError::InvalidNumber(text.to_string())),
    }
}

/// Current field values of one formula group.
///
/// # Examples
///
/// ```rust
/// use crashcalc::Inputs;
///
/// let mut inputs = Inputs::new();
/// inputs.set("v_start", 50.0);
/// inputs.set_text("v_end", "");
///
/// assert_eq!(inputs.get(&"v_start".into()), Some(50.0));
/// assert_eq!(inputs.get(&"v_end".into()), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    values: BTreeMap<VarId, f64>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Non-finite values clear it.
    pub fn set(&mut self, id: impl Into<VarId>, value: f64) {
        let id = id.into();
        if value.is_finite() {
            self.values.insert(id, value);
        } else {
            debug!(var = %id, "non-finite value treated as unset");
            self.values.remove(&id);
        }
    }

    /// Builder-style [`Inputs::set`].
    pub fn with(mut self, id: impl Into<VarId>, value: f64) -> Self {
        self.set(id, value);
        self
    }

    /// Set a field from form text. Malformed text leaves the field unset.
    pub fn set_text(&mut self, id: impl Into<VarId>, text: &str) {
        let id = id.into();
        match parse_field(text) {
            Ok(Some(value)) => {
                self.values.insert(id, value);
            }
            Ok(None) => {
                self.values.remove(&id);
            }
            Err(err) => {
                debug!(var = %id, error = %err, "malformed field treated as unset");
                self.values.remove(&id);
            }
        }
    }

    pub fn clear(&mut self, id: &VarId) {
        self.values.remove(id);
    }

    /// Raw stored value, regardless of domain.
    pub fn get(&self, id: &VarId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Value of the field if it is inside the variable's domain.
    pub fn usable(&self, spec: &VarSpec) -> Option<f64> {
        let value = self.get(&spec.id)?;
        if spec.accepts(value) {
            Some(value)
        } else {
            trace!(var = %spec.id, value, "value outside domain ignored");
            None
        }
    }

    /// Usable values of all variables of `group`, in declaration order.
    pub fn populated<'g>(&self, group: &'g FormulaGroup) -> Vec<(&'g VarId, f64)> {
        group
            .vars()
            .iter()
            .filter_map(|spec| self.usable(spec).map(|value| (&spec.id, value)))
            .collect()
    }

    /// Clear every field of `group` and restore its defaults.
    pub fn reset(&mut self, group: &FormulaGroup) {
        for spec in group.vars() {
            match spec.default {
                Some(value) => {
                    self.values.insert(spec.id.clone(), value);
                }
                None => {
                    self.values.remove(&spec.id);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VarId, f64)> {
        self.values.iter().map(|(id, value)| (id, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::{Domain, Unit};

    #[test]
    fn test_parse_field_rejects_non_finite() {
        assert!(parse_field("NaN").is_err());
        assert!(parse_field("inf").is_err());
        assert_eq!(parse_field(" 7.5 ").unwrap(), Some(7.5));
    }

    #[test]
    fn test_zero_is_not_unset() {
        let inputs = Inputs::new().with("v_end", 0.0);
        assert_eq!(inputs.get(&VarId::from_str("v_end")), Some(0.0));
    }

    #[test]
    fn test_set_text_malformed_clears() {
        let mut inputs = Inputs::new().with("rate", 7.5);
        inputs.set_text("rate", "7,5x");
        assert_eq!(inputs.get(&VarId::from_str("rate")), None);
    }

    #[test]
    fn test_set_nan_clears() {
        let mut inputs = Inputs::new().with("rate", 7.5);
        inputs.set("rate", f64::NAN);
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_usable_applies_domain() {
        let spec = VarSpec::new("angle", "Angle", Unit::Degrees, Domain::Range { min: 0.0, max: 90.0 });
        let inputs = Inputs::new().with("angle", 120.0);
        assert_eq!(inputs.get(&spec.id), Some(120.0));
        assert_eq!(inputs.usable(&spec), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let group = FormulaGroup::builder("g")
            .var(VarSpec::new("a", "a", Unit::Seconds, Domain::NonNegative).default_value(0.8))
            .var(VarSpec::new("b", "b", Unit::Seconds, Domain::NonNegative))
            .build()
            .unwrap();
        let mut inputs = Inputs::new().with("a", 1.2).with("b", 3.0).with("other", 1.0);
        inputs.reset(&group);
        assert_eq!(inputs.get(&VarId::from_str("a")), Some(0.8));
        assert_eq!(inputs.get(&VarId::from_str("b")), None);
        assert_eq!(inputs.get(&VarId::from_str("other")), Some(1.0));
    }
}
