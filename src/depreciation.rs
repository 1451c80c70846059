//! Market value diminution after accident repair.
//!
//! Two direct evaluations; neither is solved backwards. Both return 0 when
//! the value they scale is not positive.

use serde::{Deserialize, Serialize};

/// BVSK method inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bvsk {
    /// Replacement value (WBW) in €.
    pub replacement_value: f64,
    /// Market factor K.
    pub k: f64,
    /// Base percentage.
    pub percent: f64,
    /// Damage markup M in percentage points.
    pub m: f64,
}

impl Bvsk {
    /// `WBW · K · (percent + M) / 100`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crashcalc::depreciation::Bvsk;
    ///
    /// let bvsk = Bvsk { replacement_value: 20_000.0, k: 0.8, percent: 3.0, m: 1.0 };
    /// assert!((bvsk.compute() - 640.0).abs() < 1e-9);
    /// ```
    pub fn compute(&self) -> f64 {
        if self.replacement_value <= 0.0 {
            return 0.0;
        }
        self.replacement_value * self.k * (self.percent + self.m) / 100.0
    }
}

/// MFM method inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mfm {
    /// Sale value VW in €.
    pub sale_value: f64,
    /// New price NP in €.
    pub new_price: f64,
    /// Repair cost RK in €.
    pub repair_cost: f64,
    /// Damage extent factor SU.
    pub damage_extent: f64,
    /// Age correction AK, see [`crate::age::age_correction`].
    pub age_correction: f64,
    /// Marketability factor FM.
    pub marketability: f64,
    /// Prior damage factor FV.
    pub prior_damage: f64,
}

impl Mfm {
    /// `[VW/100 + VW/NP · RK · SU · AK] · FM · FV`
    pub fn compute(&self) -> f64 {
        if self.sale_value <= 0.0 || self.new_price <= 0.0 {
            return 0.0;
        }
        let base = self.sale_value / 100.0;
        let repair_share =
            self.sale_value / self.new_price * self.repair_cost * self.damage_extent * self.age_correction;
        (base + repair_share) * self.marketability * self.prior_damage
    }
}
