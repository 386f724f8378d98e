//! Stateful score estimator.
//!
//! Holds the four factor values and recomputes the result from them on every
//! read. Values supplied from outside (`set`) are rejected when out of domain;
//! stepping a slider saturates at the factor's bounds.

use tracing::debug;

use crate::error::EstimatorError;
use crate::scoring::{calculate_score, Factor, ScoreInputs, ScoreResult};

#[derive(Debug, Clone)]
pub struct Estimator {
    inputs: ScoreInputs,
    initial: ScoreInputs,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(ScoreInputs::default())
    }
}

impl Estimator {
    pub fn new(initial: ScoreInputs) -> Self {
        Self {
            inputs: initial,
            initial,
        }
    }

    pub fn inputs(&self) -> ScoreInputs {
        self.inputs
    }

    pub fn value(&self, factor: Factor) -> u8 {
        self.inputs.get(factor)
    }

    /// Store a new value for one factor.
    ///
    /// # Errors
    /// Returns `EstimatorError::OutOfDomain` and leaves the state unchanged if
    /// `value` is outside the factor's domain.
    pub fn set(&mut self, factor: Factor, value: u8) -> Result<(), EstimatorError> {
        self.inputs = self.inputs.with_value(factor, value)?;
        debug!(%factor, value, "estimator input changed");
        Ok(())
    }

    /// Move one step up. Returns false if already at the maximum.
    pub fn increment(&mut self, factor: Factor) -> bool {
        let target = self
            .value(factor)
            .saturating_add(factor.step())
            .min(factor.max());
        self.step_to(factor, target)
    }

    /// Move one step down. Returns false if already at the minimum.
    pub fn decrement(&mut self, factor: Factor) -> bool {
        let target = self
            .value(factor)
            .saturating_sub(factor.step())
            .max(factor.min());
        self.step_to(factor, target)
    }

    pub fn set_to_min(&mut self, factor: Factor) -> bool {
        self.step_to(factor, factor.min())
    }

    pub fn set_to_max(&mut self, factor: Factor) -> bool {
        self.step_to(factor, factor.max())
    }

    /// Restore the values the estimator was created with.
    pub fn reset(&mut self) {
        self.inputs = self.initial;
        debug!("estimator reset");
    }

    pub fn is_at_initial(&self) -> bool {
        self.inputs == self.initial
    }

    /// Recompute score, band and advice from the current inputs.
    pub fn result(&self) -> ScoreResult {
        calculate_score(&self.inputs)
    }

    fn step_to(&mut self, factor: Factor, target: u8) -> bool {
        if target == self.value(factor) {
            return false;
        }
        self.set(factor, target).is_ok()
    }
}
