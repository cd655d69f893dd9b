use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy shared by every service. The HTTP layer maps these to
/// status codes; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Entity absent by id or natural key, or a lookup with zero matches.
    #[error("{0}")]
    NotFound(String),
    /// Unique-key collision detected on an update path.
    #[error("{0}")]
    Conflict(String),
    /// Field or cross-entity rule violations. Create paths collect every
    /// failure into the list instead of stopping at the first one.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict(detail.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(vec![detail.into()])
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
