//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadResult<T> = Result<T, QuadError>;

/// Errors that can occur during numerical quadrature.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// Step count is zero or not a multiple of the rule order.
    ///
    /// The interior weight pattern of a composite Newton-Cotes rule repeats
    /// every `order` points, so the step count must divide evenly.
    InvalidSteps { steps: usize, order: usize },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSteps { steps, order } => {
                write!(
                    f,
                    "invalid step count {} for order {}: must be a positive multiple of the order",
                    steps, order
                )
            }
        }
    }
}

impl std::error::Error for QuadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadError::InvalidSteps { steps: 5, order: 2 };
        assert!(err.to_string().contains("invalid step count 5"));
        assert!(err.to_string().contains("order 2"));
    }
}
