//! Variable descriptions: unit, valid domain, display precision.
//!
//! A `VarSpec` is the static description of one field of a formula group.
//! The solver uses it to decide whether an entered value counts as
//! populated and to convert between the display unit and the SI value
//! the formulas operate on.

use crate::numeric::{kmh_to_ms, ms_to_kmh};
use crate::var_id::VarId;
use serde::{Deserialize, Serialize};

/// Physical unit of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    KilometersPerHour,
    MetersPerSecond,
    MetersPerSecondSquared,
    Meters,
    Seconds,
    Degrees,
    Percent,
    Euro,
    Months,
    /// Dimensionless factor.
    Factor,
}

impl Unit {
    /// Display suffix, empty for dimensionless factors.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::KilometersPerHour => "km/h",
            Unit::MetersPerSecond => "m/s",
            Unit::MetersPerSecondSquared => "m/s²",
            Unit::Meters => "m",
            Unit::Seconds => "s",
            Unit::Degrees => "°",
            Unit::Percent => "%",
            Unit::Euro => "€",
            Unit::Months => "Monate",
            Unit::Factor => "",
        }
    }

    /// Convert a value in this unit to the value the formulas expect.
    ///
    /// Only km/h is rescaled (to m/s); angles stay in degrees and the
    /// formulas convert to radians themselves.
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Unit::KilometersPerHour => kmh_to_ms(value),
            _ => value,
        }
    }

    /// Inverse of [`Unit::to_si`].
    pub fn from_si(self, value: f64) -> f64 {
        match self {
            Unit::KilometersPerHour => ms_to_kmh(value),
            _ => value,
        }
    }
}

/// The legal value range of a variable.
///
/// # Examples
///
/// ```rust
/// use crashcalc::Domain;
///
/// assert!(Domain::NonNegative.contains(0.0));
/// assert!(!Domain::Positive.contains(0.0));
/// assert!(Domain::Range { min: 0.0, max: 90.0 }.contains(90.0));
/// assert!(!Domain::Any.contains(f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    Any,
    NonNegative,
    Positive,
    /// Inclusive range.
    Range { min: f64, max: f64 },
}

impl Domain {
    /// Whether `value` is finite and inside the domain.
    pub fn contains(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Domain::Any => true,
            Domain::NonNegative => value >= 0.0,
            Domain::Positive => value > 0.0,
            Domain::Range { min, max } => value >= min && value <= max,
        }
    }
}

/// Static description of one variable of a formula group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarSpec {
    pub id: VarId,
    /// Human-readable label shown next to the field.
    pub label: String,
    pub unit: Unit,
    pub domain: Domain,
    /// Decimal places used when the value is displayed.
    pub precision: u32,
    /// Value restored on reset; `None` leaves the field blank.
    pub default: Option<f64>,
}

impl VarSpec {
    /// Create a spec with two display decimals and no default.
    pub fn new(id: impl Into<VarId>, label: impl Into<String>, unit: Unit, domain: Domain) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            unit,
            domain,
            precision: 2,
            default: None,
        }
    }

    /// Set the display precision.
    pub fn precision(mut self, places: u32) -> Self {
        self.precision = places;
        self
    }

    /// Set the reset default.
    pub fn default_value(mut self, value: f64) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether `value` is usable for this variable.
    pub fn accepts(&self, value: f64) -> bool {
        self.domain.contains(value)
    }
}
