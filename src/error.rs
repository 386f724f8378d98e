use crate::scoring::Factor;

/// Errors raised when a value falls outside a factor's domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimatorError {
    #[error("{factor} must be between {min} and {max}, got {value}")]
    OutOfDomain {
        factor: Factor,
        value: u16,
        min: u8,
        max: u8,
    },
}

impl EstimatorError {
    pub fn out_of_domain(factor: Factor, value: u16) -> Self {
        EstimatorError::OutOfDomain {
            factor,
            value,
            min: factor.min(),
            max: factor.max(),
        }
    }
}
