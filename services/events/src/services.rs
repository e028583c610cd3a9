//! Domain services
//!
//! Expected business failures are returned as typed response values. The few
//! operations that can hit a not-found or invalid-input condition without a
//! response shape for it return [`ServiceError`] instead.

use thiserror::Error;

pub mod event;
pub mod feedback;
pub mod search;
pub mod user;

pub use event::EventService;
pub use feedback::FeedbackService;
pub use user::UserService;

/// Errors that cross a service boundary
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The input was rejected before reaching the store
    #[error("{0}")]
    Invalid(String),

    /// Unexpected failure, usually from the store
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Type alias for service results
pub type ServiceResult<T> = Result<T, ServiceError>;
