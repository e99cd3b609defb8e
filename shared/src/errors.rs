//! Error types for the Dog Health Assistant application

use thiserror::Error;

/// Errors raised while turning raw form input into calculator input
///
/// The calculator itself never fails; only the boundary does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Please fill all fields.")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),
}

impl CalculatorError {
    /// Name of the offending form field(s), comma separated
    pub fn field(&self) -> String {
        match self {
            CalculatorError::MissingFields(fields) => fields.join(", "),
            CalculatorError::InvalidWeight(_) => "weight".to_string(),
        }
    }
}
