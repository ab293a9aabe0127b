//! Authentication API client methods

use super::{ClientError, CristalClient, PublicCristalClient};
use crate::types::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
use cristal_core::types::UserProfile;

impl PublicCristalClient {
    /// Exchange credentials for a token pair
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse, ClientError> {
        let req = self.request(reqwest::Method::POST, "/token/").json(&LoginRequest {
            username: username.into(),
            password: password.into(),
        });
        self.execute(req).await
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh(&self, refresh: &str) -> Result<RefreshResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/token/refresh/")
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            });
        self.execute(req).await
    }
}

impl CristalClient {
    /// Profile of the currently authenticated user
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        self.get("/users/me/").await
    }
}
