//! Error types for the calculator, lead boundary, product display and config

use thiserror::Error;

/// Errors raised by the amortization and eligibility engine
///
/// Out-of-domain input is always rejected, never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid input '{field}' = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CalculatorError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        CalculatorError::InvalidInput { field, value, reason }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            CalculatorError::InvalidInput { field, .. } => field,
        }
    }
}

/// Errors raised while accepting a contact lead
#[derive(Error, Debug)]
pub enum LeadError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("lead sink failed: {0}")]
    Sink(String),
}

impl LeadError {
    /// True for failures caused by the submitted fields themselves
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LeadError::MissingFields | LeadError::InvalidEmail | LeadError::InvalidPhone
        )
    }
}

/// Errors raised while loading the external product entry
#[derive(Error, Debug)]
pub enum ProductError {
    #[error("product source not configured")]
    NotConfigured,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("product parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while loading site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
