//! Unified error handling for the catalog data layer.
//!
//! Store failures are folded into the closed [`StoreError`] set so callers
//! can translate constraint violations without inspecting driver errors.

use domain::DomainError;
use thiserror::Error;

/// Failures reported by the relational store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("not-null constraint violated: {0}")]
    NotNullViolation(String),

    #[error("database connection failed: {0}")]
    ConnectionError(String),

    #[error("database error: {0}")]
    Unknown(String),
}

impl StoreError {
    /// Classify a driver message by the constraint it names.
    ///
    /// Covers the SQLite, PostgreSQL and MySQL wordings.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        if lower.contains("unique constraint") || lower.contains("duplicate key") || lower.contains("duplicate entry") {
            StoreError::UniqueViolation(message)
        } else if lower.contains("foreign key constraint") {
            StoreError::ForeignKeyViolation(message)
        } else if lower.contains("not null constraint")
            || lower.contains("not-null constraint")
            || lower.contains("cannot be null")
        {
            StoreError::NotNullViolation(message)
        } else {
            StoreError::Unknown(message)
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::UniqueViolation(_) => "UNIQUE_VIOLATION",
            StoreError::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            StoreError::NotNullViolation(_) => "NOT_NULL_VIOLATION",
            StoreError::ConnectionError(_) => "DATABASE_UNAVAILABLE",
            StoreError::Unknown(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
            return StoreError::ConnectionError(err.to_string());
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::ForeignKeyViolation(msg),
            _ => StoreError::classify(err.to_string()),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Store(e) => e.code(),
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Store(StoreError::UniqueViolation(_)) => {
                "A record with the same unique value already exists".to_string()
            }
            AppError::Store(StoreError::ForeignKeyViolation(_)) => {
                "The record references missing data or is still referenced".to_string()
            }
            AppError::Store(StoreError::NotNullViolation(_)) => "A required field is missing".to_string(),
            AppError::Store(StoreError::ConnectionError(e)) => {
                tracing::error!("Database connection error: {}", e);
                "The database is unavailable".to_string()
            }
            AppError::Store(StoreError::Unknown(e)) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::NotFound => self.to_string(),
        }
    }

    /// The wrapped store error, if any
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            AppError::Store(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::DbErr;

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::Store(StoreError::from(other)),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Document(msg) => AppError::Internal(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
