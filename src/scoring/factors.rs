use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EstimatorError;

/// One of the four weighted inputs to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    PaymentHistory,
    CreditUtilization,
    AccountAge,
    CreditMix,
}

impl Factor {
    /// All factors in evaluation and display order.
    pub const ALL: [Factor; 4] = [
        Factor::PaymentHistory,
        Factor::CreditUtilization,
        Factor::AccountAge,
        Factor::CreditMix,
    ];

    pub fn min(self) -> u8 {
        match self {
            Factor::PaymentHistory => 50,
            Factor::CreditUtilization => 0,
            Factor::AccountAge => 0,
            Factor::CreditMix => 1,
        }
    }

    pub fn max(self) -> u8 {
        match self {
            Factor::PaymentHistory => 100,
            Factor::CreditUtilization => 100,
            Factor::AccountAge => 20,
            Factor::CreditMix => 5,
        }
    }

    pub fn step(self) -> u8 {
        1
    }

    pub fn default_value(self) -> u8 {
        match self {
            Factor::PaymentHistory => 95,
            Factor::CreditUtilization => 30,
            Factor::AccountAge => 7,
            Factor::CreditMix => 3,
        }
    }

    pub fn contains(self, value: u8) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Short human name, e.g. "Account Age"
    pub fn name(self) -> &'static str {
        match self {
            Factor::PaymentHistory => "Payment History",
            Factor::CreditUtilization => "Credit Utilization",
            Factor::AccountAge => "Account Age",
            Factor::CreditMix => "Credit Mix",
        }
    }

    /// Slider label including the nominal weight share
    pub fn label(self) -> &'static str {
        match self {
            Factor::PaymentHistory => "Payment History (35%)",
            Factor::CreditUtilization => "Credit Utilization (30%)",
            Factor::AccountAge => "Account Age (15%)",
            Factor::CreditMix => "Credit Mix (10%)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Factor::PaymentHistory | Factor::CreditUtilization => "%",
            Factor::AccountAge => " yrs",
            Factor::CreditMix => " types",
        }
    }

    /// Format a value with this factor's unit ("95%", "7 yrs", "3 types")
    pub fn format_value(self, value: u8) -> String {
        format!("{}{}", value, self.unit())
    }

    /// Points this factor contributes on top of the base score.
    ///
    /// Each term multiplies before dividing so the weight is always an exact
    /// multiple of 0.5 in f64.
    pub fn weight(self, value: u8) -> f64 {
        let v = f64::from(value);
        match self {
            Factor::PaymentHistory => v * 350.0 / 100.0,
            Factor::CreditUtilization => (100.0 - v) * 300.0 / 100.0,
            // Saturates at 15 years
            Factor::AccountAge => v.min(15.0) * 150.0 / 15.0,
            Factor::CreditMix => v * 100.0 / 5.0,
        }
    }

    /// Largest weight the factor can ever contribute
    pub fn max_weight(self) -> f64 {
        match self {
            Factor::PaymentHistory => 350.0,
            Factor::CreditUtilization => 300.0,
            Factor::AccountAge => 150.0,
            Factor::CreditMix => 100.0,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four factor values, always inside their domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreInputs {
    payment_history: u8,
    credit_utilization: u8,
    account_age: u8,
    credit_mix: u8,
}

impl Default for ScoreInputs {
    fn default() -> Self {
        Self {
            payment_history: Factor::PaymentHistory.default_value(),
            credit_utilization: Factor::CreditUtilization.default_value(),
            account_age: Factor::AccountAge.default_value(),
            credit_mix: Factor::CreditMix.default_value(),
        }
    }
}

impl ScoreInputs {
    pub fn new(
        payment_history: u8,
        credit_utilization: u8,
        account_age: u8,
        credit_mix: u8,
    ) -> Result<Self, EstimatorError> {
        Self::default()
            .with_value(Factor::PaymentHistory, payment_history)?
            .with_value(Factor::CreditUtilization, credit_utilization)?
            .with_value(Factor::AccountAge, account_age)?
            .with_value(Factor::CreditMix, credit_mix)
    }

    /// Return a copy with one factor replaced, rejecting out-of-domain values.
    pub fn with_value(mut self, factor: Factor, value: u8) -> Result<Self, EstimatorError> {
        if !factor.contains(value) {
            return Err(EstimatorError::out_of_domain(factor, value.into()));
        }
        match factor {
            Factor::PaymentHistory => self.payment_history = value,
            Factor::CreditUtilization => self.credit_utilization = value,
            Factor::AccountAge => self.account_age = value,
            Factor::CreditMix => self.credit_mix = value,
        }
        Ok(self)
    }

    /// Like [`with_value`](Self::with_value) for values read from a wider
    /// source such as command-line flags.
    pub fn with_wide_value(self, factor: Factor, value: u16) -> Result<Self, EstimatorError> {
        let narrow =
            u8::try_from(value).map_err(|_| EstimatorError::out_of_domain(factor, value))?;
        self.with_value(factor, narrow)
    }

    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::PaymentHistory => self.payment_history,
            Factor::CreditUtilization => self.credit_utilization,
            Factor::AccountAge => self.account_age,
            Factor::CreditMix => self.credit_mix,
        }
    }

    pub fn payment_history(&self) -> u8 {
        self.payment_history
    }

    pub fn credit_utilization(&self) -> u8 {
        self.credit_utilization
    }

    pub fn account_age(&self) -> u8 {
        self.account_age
    }

    pub fn credit_mix(&self) -> u8 {
        self.credit_mix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_inside_domain() {
        for factor in Factor::ALL {
            assert!(factor.contains(factor.default_value()), "{factor}");
        }
    }

    #[test]
    fn test_default_inputs() {
        let inputs = ScoreInputs::default();
        assert_eq!(inputs.payment_history(), 95);
        assert_eq!(inputs.credit_utilization(), 30);
        assert_eq!(inputs.account_age(), 7);
        assert_eq!(inputs.credit_mix(), 3);
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(ScoreInputs::new(50, 0, 0, 1).is_ok());
        assert!(ScoreInputs::new(100, 100, 20, 5).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_domain() {
        let err = ScoreInputs::new(49, 30, 7, 3).unwrap_err();
        assert_eq!(
            err,
            EstimatorError::OutOfDomain {
                factor: Factor::PaymentHistory,
                value: 49,
                min: 50,
                max: 100,
            }
        );
        assert!(ScoreInputs::new(95, 101, 7, 3).is_err());
        assert!(ScoreInputs::new(95, 30, 21, 3).is_err());
        assert!(ScoreInputs::new(95, 30, 7, 0).is_err());
        assert!(ScoreInputs::new(95, 30, 7, 6).is_err());
    }

    #[test]
    fn test_with_wide_value_reports_full_value() {
        let inputs = ScoreInputs::default();
        assert_eq!(
            inputs.with_wide_value(Factor::CreditUtilization, 256).unwrap_err(),
            EstimatorError::out_of_domain(Factor::CreditUtilization, 256)
        );
        assert_eq!(
            inputs.with_wide_value(Factor::PaymentHistory, 300).unwrap_err().to_string(),
            "Payment History must be between 50 and 100, got 300"
        );
        let raised = inputs.with_wide_value(Factor::AccountAge, 20).unwrap();
        assert_eq!(raised.get(Factor::AccountAge), 20);
    }

    #[test]
    fn test_with_value_leaves_original_untouched_on_error() {
        let inputs = ScoreInputs::default();
        assert!(inputs.with_value(Factor::CreditMix, 9).is_err());
        assert_eq!(inputs, ScoreInputs::default());
    }

    #[test]
    fn test_get_matches_accessors() {
        let inputs = ScoreInputs::new(80, 45, 12, 2).unwrap();
        assert_eq!(inputs.get(Factor::PaymentHistory), 80);
        assert_eq!(inputs.get(Factor::CreditUtilization), 45);
        assert_eq!(inputs.get(Factor::AccountAge), 12);
        assert_eq!(inputs.get(Factor::CreditMix), 2);
    }

    #[test]
    fn test_weights_at_defaults() {
        assert_eq!(Factor::PaymentHistory.weight(95), 332.5);
        assert_eq!(Factor::CreditUtilization.weight(30), 210.0);
        assert_eq!(Factor::AccountAge.weight(7), 70.0);
        assert_eq!(Factor::CreditMix.weight(3), 60.0);
    }

    #[test]
    fn test_account_age_saturates_at_fifteen() {
        assert_eq!(Factor::AccountAge.weight(15), 150.0);
        assert_eq!(Factor::AccountAge.weight(20), 150.0);
        assert!(Factor::AccountAge.weight(14) < 150.0);
    }

    #[test]
    fn test_weights_never_exceed_max() {
        for factor in Factor::ALL {
            for value in factor.min()..=factor.max() {
                let w = factor.weight(value);
                assert!(w >= 0.0 && w <= factor.max_weight(), "{factor} {value} -> {w}");
            }
        }
    }

    #[test]
    fn test_format_value_units() {
        assert_eq!(Factor::PaymentHistory.format_value(95), "95%");
        assert_eq!(Factor::AccountAge.format_value(7), "7 yrs");
        assert_eq!(Factor::CreditMix.format_value(3), "3 types");
    }
}
