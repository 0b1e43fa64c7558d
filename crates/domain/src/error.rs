//! Unified error types for the domain layer
//!
//! Derivation is almost entirely total. The only hard failure is input that is
//! outside the rules' domain, such as a negative NEX. Malformed item payloads
//! are skipped during aggregation and never surface here.

use thiserror::Error;

use crate::value_objects::RollFormulaError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., out-of-domain input values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for out-of-domain input.
    ///
    /// # Example
    /// ```ignore
    /// if nex < 0 {
    ///     return Err(DomainError::validation("NEX cannot be negative"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<RollFormulaError> for DomainError {
    fn from(err: RollFormulaError) -> Self {
        Self::Parse(err.to_string())
    }
}
