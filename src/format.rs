//! Display formatting of values and outcomes.

use crate::error::CalcError;
use crate::numeric::round_half_away;
use crate::outcome::SolveOutcome;
use crate::variable::VarSpec;
use serde::{Deserialize, Serialize};

/// How numbers and outcome markers are rendered.
///
/// Loadable from JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```rust
/// use crashcalc::FormatOptions;
///
/// let opts = FormatOptions::from_json(r#"{ "decimal_separator": "." }"#).unwrap();
/// assert_eq!(opts.decimal_separator, '.');
/// assert_eq!(opts.indeterminate, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub decimal_separator: char,
    /// Append the variable's unit after the number.
    pub unit_suffix: bool,
    /// Text shown for an indeterminate outcome.
    pub indeterminate: String,
    /// Text shown for a conflicting input set.
    pub error: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            unit_suffix: true,
            indeterminate: "-".to_string(),
            error: "ERROR".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Round half away from zero and print with exactly `places` decimals.
///
/// # Examples
///
/// ```rust
/// use crashcalc::format::format_number;
/// use crashcalc::FormatOptions;
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_number(11.1111, 2, &opts), "11,11");
/// assert_eq!(format_number(2.345, 2, &opts), "2,35");
/// assert_eq!(format_number(-0.001, 2, &opts), "0,00");
/// ```
pub fn format_number(value: f64, places: u32, opts: &FormatOptions) -> String {
    let mut rounded = round_half_away(value, places);
    if rounded == 0.0 {
        // drops the sign of -0.0
        rounded = 0.0;
    }
    let text = format!("{:.*}", places as usize, rounded);
    if opts.decimal_separator == '.' {
        text
    } else {
        text.replace('.', &opts.decimal_separator.to_string())
    }
}

/// Format `value` with the precision and unit of `spec`.
pub fn format_quantity(value: f64, spec: &VarSpec, opts: &FormatOptions) -> String {
    let number = format_number(value, spec.precision, opts);
    let suffix = spec.unit.suffix();
    if opts.unit_suffix && !suffix.is_empty() {
        format!("{} {}", number, suffix)
    } else {
        number
    }
}

/// Text for one target field.
pub fn format_outcome(outcome: &SolveOutcome, spec: &VarSpec, opts: &FormatOptions) -> String {
    match outcome {
        SolveOutcome::Resolved { value, .. } | SolveOutcome::Echo { value } => {
            format_quantity(*value, spec, opts)
        }
        SolveOutcome::Indeterminate => opts.indeterminate.clone(),
        SolveOutcome::Error => opts.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FormulaKey;
    use crate::variable::{Domain, Unit};

    fn speed() -> VarSpec {
        VarSpec::new("v_start", "Anfangsgeschwindigkeit", Unit::KilometersPerHour, Domain::NonNegative)
    }

    #[test]
    fn test_zero_prints_with_decimals() {
        let opts = FormatOptions::default();
        assert_eq!(format_number(0.0, 2, &opts), "0,00");
        assert_eq!(format_number(-0.0, 3, &opts), "0,000");
    }

    #[test]
    fn test_half_away_from_zero() {
        let opts = FormatOptions::default();
        assert_eq!(format_number(0.125, 2, &opts), "0,13");
        assert_eq!(format_number(-0.125, 2, &opts), "-0,13");
        assert_eq!(format_number(1.5, 0, &opts), "2");
    }

    #[test]
    fn test_quantity_with_unit() {
        let opts = FormatOptions::default();
        assert_eq!(format_quantity(72.0, &speed(), &opts), "72,00 km/h");

        let plain = FormatOptions {
            unit_suffix: false,
            decimal_separator: '.',
            ..FormatOptions::default()
        };
        assert_eq!(format_quantity(72.0, &speed(), &plain), "72.00");
    }

    #[test]
    fn test_outcome_markers() {
        let opts = FormatOptions::default();
        let spec = speed();
        assert_eq!(format_outcome(&SolveOutcome::Indeterminate, &spec, &opts), "-");
        assert_eq!(format_outcome(&SolveOutcome::Error, &spec, &opts), "ERROR");

        let resolved = SolveOutcome::Resolved {
            value: 49.996,
            formula: FormulaKey::new("deceleration.v_start(v_end,rate,duration)"),
        };
        assert_eq!(format_outcome(&resolved, &spec, &opts), "50,00 km/h");
    }

    #[test]
    fn test_options_from_json() {
        let opts = FormatOptions::from_json(r#"{ "error": "Fehler", "unit_suffix": false }"#).unwrap();
        assert_eq!(opts.error, "Fehler");
        assert!(!opts.unit_suffix);
        assert_eq!(opts.decimal_separator, ',');

        assert!(FormatOptions::from_json("{ nope").is_err());
    }
}
