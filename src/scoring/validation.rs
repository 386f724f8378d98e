use super::config::InitialInputs;
use super::factors::Factor;

/// Validate configured starting values at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_initial_inputs(initial: &InitialInputs) -> Result<(), Vec<String>> {
    let errors: Vec<String> = Factor::ALL
        .iter()
        .filter_map(|&factor| {
            let value = initial.get(factor)?;
            if factor.contains(value) {
                None
            } else {
                Some(format!(
                    "initial.{}: {} is outside {}..={}",
                    field_name(factor),
                    value,
                    factor.min(),
                    factor.max()
                ))
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn field_name(factor: Factor) -> &'static str {
    match factor {
        Factor::PaymentHistory => "payment_history",
        Factor::CreditUtilization => "credit_utilization",
        Factor::AccountAge => "account_age",
        Factor::CreditMix => "credit_mix",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_initial_is_valid() {
        assert!(validate_initial_inputs(&InitialInputs::default()).is_ok());
    }

    #[test]
    fn test_bounds_are_valid() {
        let initial = InitialInputs {
            payment_history: Some(50),
            credit_utilization: Some(100),
            account_age: Some(0),
            credit_mix: Some(5),
        };
        assert!(validate_initial_inputs(&initial).is_ok());
    }

    #[test]
    fn test_single_error_names_field() {
        let initial = InitialInputs {
            account_age: Some(25),
            ..Default::default()
        };
        let errors = validate_initial_inputs(&initial).unwrap_err();
        assert_eq!(errors, vec!["initial.account_age: 25 is outside 0..=20"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let initial = InitialInputs {
            payment_history: Some(10),  // Error 1
            credit_utilization: Some(50),
            account_age: Some(21),      // Error 2
            credit_mix: Some(0),        // Error 3
        };
        let errors = validate_initial_inputs(&initial).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("payment_history"));
        assert!(errors[2].contains("credit_mix"));
    }
}
