//! Unified error handling.
//!
//! Store-level errors (`NotFound`, `InvalidArgument`, `Conflict`) and
//! service-level errors (`UserNotFound`, `CannotCreateForMissingUser`) share
//! one type so callers can match on a single enum. Services translate store
//! errors into their own variants instead of leaking them.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Store errors
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Service errors
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("cannot create todo for non-existent user: {0}")]
    CannotCreateForMissingUser(String),

    // Context
    #[error("operation cancelled")]
    Cancelled,

    // Internal
    #[error("internal error")]
    Internal(String),
}

impl AppError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Conflict(_) => "CONFLICT",
            AppError::UserNotFound(_) => "USER_NOT_FOUND",
            AppError::CannotCreateForMissingUser(_) => "CANNOT_CREATE_FOR_MISSING_USER",
            AppError::Cancelled => "CANCELLED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check for a store-level lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyId(_) => AppError::InvalidArgument(err.to_string()),
            DomainError::Validation(msg) => AppError::InvalidArgument(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &'static str, id: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str, id: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(entity, id))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn conflict(what: impl Into<String>) -> Self {
        AppError::Conflict(what.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
