use serde::{Deserialize, Serialize};

use super::factors::{Factor, ScoreInputs};
use crate::error::EstimatorError;

/// Starting slider positions.
///
/// Every field is optional; missing fields fall back to the factor default.
///
/// Example YAML:
/// ```yaml
/// initial:
///   payment_history: 88
///   account_age: 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InitialInputs {
    #[serde(default)]
    pub payment_history: Option<u8>,

    #[serde(default)]
    pub credit_utilization: Option<u8>,

    #[serde(default)]
    pub account_age: Option<u8>,

    #[serde(default)]
    pub credit_mix: Option<u8>,
}

impl InitialInputs {
    pub fn get(&self, factor: Factor) -> Option<u8> {
        match factor {
            Factor::PaymentHistory => self.payment_history,
            Factor::CreditUtilization => self.credit_utilization,
            Factor::AccountAge => self.account_age,
            Factor::CreditMix => self.credit_mix,
        }
    }

    /// Overlay the configured values onto the defaults.
    pub fn resolve(&self) -> Result<ScoreInputs, EstimatorError> {
        Factor::ALL
            .iter()
            .try_fold(ScoreInputs::default(), |inputs, &factor| match self.get(factor) {
                Some(value) => inputs.with_value(factor, value),
                None => Ok(inputs),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolves_to_defaults() {
        let initial: InitialInputs = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(initial, InitialInputs::default());
        assert_eq!(initial.resolve().unwrap(), ScoreInputs::default());
    }

    #[test]
    fn test_partial_overlay() {
        let yaml = r#"
payment_history: 88
account_age: 2
"#;
        let initial: InitialInputs = serde_saphyr::from_str(yaml).unwrap();
        let inputs = initial.resolve().unwrap();
        assert_eq!(inputs.payment_history(), 88);
        assert_eq!(inputs.credit_utilization(), 30);
        assert_eq!(inputs.account_age(), 2);
        assert_eq!(inputs.credit_mix(), 3);
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let initial = InitialInputs {
            credit_mix: Some(7),
            ..Default::default()
        };
        assert_eq!(
            initial.resolve().unwrap_err(),
            EstimatorError::out_of_domain(Factor::CreditMix, 7)
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "payment: 90";
        assert!(serde_saphyr::from_str::<InitialInputs>(yaml).is_err());
    }
}
