//! Full stopping sequence.
//!
//! A fixed forward computation over three phases: reaction (constant
//! speed), brake threshold (deceleration ramping linearly up to the mean
//! deceleration, so the phase averages half of it) and full braking.
//! All five inputs are required; nothing is solved backwards.

use crate::inputs::Inputs;
use crate::numeric::{kmh_to_ms, ms_to_kmh};
use crate::var_id::VarId;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const V_START: &str = "v_start";
pub const V_END: &str = "v_end";
pub const REACTION_TIME: &str = "reaction_time";
pub const THRESHOLD_TIME: &str = "threshold_time";
pub const MEAN_DECEL: &str = "mean_decel";

/// Inputs of the stopping sequence. Speeds in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoppingInput {
    pub v_start: f64,
    pub v_end: f64,
    pub reaction_time: f64,
    pub threshold_time: f64,
    pub mean_decel: f64,
}

/// Phase-by-phase result. Distances in m, durations in s, speeds in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoppingSequence {
    pub reaction_distance: f64,
    pub threshold_distance: f64,
    /// Speed when full braking sets in.
    pub onset_speed: f64,
    pub braking_distance: f64,
    pub braking_duration: f64,
    pub total_distance: f64,
    pub total_duration: f64,
}

impl StoppingInput {
    /// Read the five fields from `inputs`.
    ///
    /// Returns `None` if any of them is unset or negative.
    pub fn from_inputs(inputs: &Inputs) -> Option<Self> {
        let field = |name: &str| {
            inputs
                .get(&VarId::from_str(name))
                .filter(|value| value.is_finite() && *value >= 0.0)
        };
        Some(Self {
            v_start: field(V_START)?,
            v_end: field(V_END)?,
            reaction_time: field(REACTION_TIME)?,
            threshold_time: field(THRESHOLD_TIME)?,
            mean_decel: field(MEAN_DECEL)?,
        })
    }

    /// Run the three phases.
    ///
    /// Returns `None` when the mean deceleration is not positive, the end
    /// speed is above the speed reached after the threshold phase, or any
    /// result is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use crashcalc::stopping::StoppingInput;
    ///
    /// let seq = StoppingInput {
    ///     v_start: 50.0,
    ///     v_end: 0.0,
    ///     reaction_time: 0.8,
    ///     threshold_time: 0.2,
    ///     mean_decel: 7.5,
    /// }
    /// .compute()
    /// .unwrap();
    ///
    /// assert!((seq.reaction_distance - 11.11).abs() < 0.01);
    /// assert_eq!(
    ///     seq.total_distance,
    ///     seq.reaction_distance + seq.threshold_distance + seq.braking_distance
    /// );
    /// ```
    pub fn compute(&self) -> Option<StoppingSequence> {
        if self.mean_decel <= 0.0 {
            debug!(mean_decel = self.mean_decel, "stopping sequence needs a positive deceleration");
            return None;
        }

        let va = kmh_to_ms(self.v_start);
        let ve = kmh_to_ms(self.v_end);
        let a = self.mean_decel;
        let tr = self.reaction_time;
        let ts = self.threshold_time;

        let reaction_distance = va * tr;
        let threshold_distance = va * ts - 0.5 * (a / 2.0) * ts * ts;
        let onset = va - (a / 2.0) * ts;

        if ve > onset {
            debug!(v_end = self.v_end, onset = ms_to_kmh(onset), "end speed above full-braking onset");
            return None;
        }

        let braking_distance = (onset * onset - ve * ve) / (2.0 * a);
        let braking_duration = (onset - ve) / a;

        let sequence = StoppingSequence {
            reaction_distance,
            threshold_distance,
            onset_speed: ms_to_kmh(onset),
            braking_distance,
            braking_duration,
            total_distance: reaction_distance + threshold_distance + braking_distance,
            total_duration: tr + ts + braking_duration,
        };

        let values = [
            sequence.reaction_distance,
            sequence.threshold_distance,
            sequence.onset_speed,
            sequence.braking_distance,
            sequence.braking_duration,
            sequence.total_distance,
            sequence.total_duration,
        ];
        values.iter().all(|v| v.is_finite()).then_some(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> StoppingInput {
        StoppingInput {
            v_start: 50.0,
            v_end: 0.0,
            reaction_time: 0.8,
            threshold_time: 0.2,
            mean_decel: 7.5,
        }
    }

    #[test]
    fn test_reference_sequence() {
        let seq = reference().compute().unwrap();
        let va = 50.0 / 3.6;

        assert!((seq.reaction_distance - 11.111).abs() < 1e-3);
        assert!((seq.threshold_distance - (va * 0.2 - 0.5 * 3.75 * 0.04)).abs() < 1e-12);
        assert!((seq.onset_speed - (va - 0.75) * 3.6).abs() < 1e-9);

        let onset = va - 0.75;
        assert!((seq.braking_distance - onset * onset / 15.0).abs() < 1e-12);
        assert!((seq.braking_duration - onset / 7.5).abs() < 1e-12);

        assert_eq!(
            seq.total_distance,
            seq.reaction_distance + seq.threshold_distance + seq.braking_distance
        );
        assert_eq!(seq.total_duration, 0.8 + 0.2 + seq.braking_duration);
    }

    #[test]
    fn test_zero_deceleration_has_no_result() {
        let mut input = reference();
        input.mean_decel = 0.0;
        assert!(input.compute().is_none());
    }

    #[test]
    fn test_end_speed_above_onset_has_no_result() {
        let mut input = reference();
        input.v_end = 60.0;
        assert!(input.compute().is_none());
    }

    #[test]
    fn test_from_inputs_requires_all_fields() {
        let inputs = Inputs::new()
            .with(V_START, 50.0)
            .with(V_END, 0.0)
            .with(REACTION_TIME, 0.8)
            .with(THRESHOLD_TIME, 0.2);
        assert!(StoppingInput::from_inputs(&inputs).is_none());

        let inputs = inputs.with(MEAN_DECEL, 7.5);
        assert_eq!(StoppingInput::from_inputs(&inputs), Some(reference()));
    }
}
