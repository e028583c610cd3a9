//! Caller identity extraction
//!
//! Sessions are not implemented: the caller identifies itself with the
//! `X-User-Id` header carrying its user id. Handlers receive the identity as
//! an explicit [`Caller`] and pass it down to the services.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use tracing::warn;
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the caller, `None` for anonymous requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub Option<Uuid>);

impl Caller {
    /// Read the identity from request headers; a malformed id is rejected
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let Some(value) = headers.get(USER_ID_HEADER) else {
            return Ok(Caller(None));
        };

        let id = value
            .to_str()
            .ok()
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or_else(|| {
                warn!("Rejected malformed {} header", USER_ID_HEADER);
                ApiError::Unauthorized
            })?;

        Ok(Caller(Some(id)))
    }

    /// The caller's id, for operations that cannot be anonymous
    pub fn require(self) -> Result<Uuid, ApiError> {
        self.0.ok_or(ApiError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Caller::from_headers(&parts.headers)
    }
}
