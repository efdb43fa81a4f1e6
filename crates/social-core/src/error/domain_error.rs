//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("No query provided.")]
    MissingSearchQuery,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid privacy level: {0}")]
    InvalidPrivacy(String),

    // =========================================================================
    // Policy Violations (programming errors, fatal to the request)
    // =========================================================================
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSearchQuery => "NO_QUERY_PROVIDED",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPrivacy(_) => "INVALID_PRIVACY",
            Self::PolicyViolation(_) => "POLICY_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a malformed-input error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if the request was well-formed but cannot be processed
    pub fn is_unprocessable(&self) -> bool {
        matches!(self, Self::MissingSearchQuery)
    }

    /// Check if an internal invariant of the policy engine was breached
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation(_))
    }
}
