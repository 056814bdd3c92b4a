//! Sales domain errors

use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised while building sales entities
#[derive(Debug, Error)]
pub enum SalesError {
    /// One or more seller attributes failed validation
    #[error("Invalid seller data: {0}")]
    InvalidSeller(String),
}

impl SalesError {
    /// Flattens validator output into a single message
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
                format!("{} ({})", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        SalesError::InvalidSeller(fields.join("; "))
    }
}
