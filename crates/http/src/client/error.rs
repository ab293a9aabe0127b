//! Error taxonomy for the Cristal API client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure before a status code was available
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 400; a rejected login attempt surfaces here
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 401 on a request that was already replayed once
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 403
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The builder was given an incomplete configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The refresh-token exchange failed; stored credentials were cleared
    #[error("session expired: {0}")]
    SessionExpired(String),
}

impl ClientError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            StatusCode::UNAUTHORIZED => Self::AuthenticationFailed(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            other => Self::ServerError {
                status: other.as_u16(),
                message,
            },
        }
    }

    /// True when the caller's session is no longer usable
    pub fn is_auth_expired(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::SessionExpired(_)
        )
    }

    /// True for a rejected login attempt
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::BadRequest(_) | Self::AuthenticationFailed(_))
    }
}
