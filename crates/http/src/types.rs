//! Wire types for the authentication endpoints

use cristal_core::types::UserProfile;
use serde::{Deserialize, Serialize};

/// Payload for `POST /token/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from `POST /token/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Payload for `POST /token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response from `POST /token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}
