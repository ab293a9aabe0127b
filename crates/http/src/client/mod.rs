//! Cristal API client
//!
//! The authenticated client implements the per-request pipeline: attach the
//! bearer token, send, and on a 401 exchange the refresh token for a new
//! access token and replay the original request exactly once. A request
//! that has already been replayed propagates its 401 unchanged, which is
//! what prevents refresh loops. Concurrent 401s share a single in-flight
//! refresh through an async lock.

pub mod auth;
pub mod customers;
pub mod employees;
pub mod error;
pub mod orders;
pub mod services;

use cristal_core::store::{keys, CookieAttributes, TokenStore};
use error::ClientError;
use futures::lock::Mutex;
use reqwest::{header, Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = "cristal-client/0.1.0";

/// Hook invoked after an unrecoverable refresh failure, once the store has
/// been cleared. The frontend uses it to navigate to the login view.
pub type SessionExpiredHook = Arc<dyn Fn()>;

/// Client for the public endpoints (`/token/`, `/token/refresh/`)
#[derive(Clone)]
pub struct PublicCristalClient {
    client: Client,
    base_url: String,
}

impl PublicCristalClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        CristalClient::builder().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        decode(request.send().await?).await
    }
}

/// Client for authenticated resources, with transparent token refresh
#[derive(Clone)]
pub struct CristalClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    cookies: CookieAttributes,
    refresh_gate: Arc<Mutex<()>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl CristalClient {
    /// Create a new client builder
    pub fn builder() -> CristalClientBuilder {
        CristalClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public client sharing this client's transport, for the refresh call
    pub fn to_public(&self) -> PublicCristalClient {
        PublicCristalClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }

    /// Issue a GET and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(Method::GET, path, None).await
    }

    /// Issue a POST with a JSON body and decode the JSON response
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let token = self.store.get(keys::ACCESS_TOKEN);
        let response = self
            .dispatch(&method, path, body.as_ref(), token.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return decode(response).await;
        }

        // Single automatic retry. Whatever the replay returns is decoded
        // as-is, so a second 401 reaches the caller without another refresh.
        let response = self
            .refresh_and_retry(&method, path, body.as_ref(), token)
            .await?;
        decode(response).await
    }

    async fn refresh_and_retry(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        stale_token: Option<String>,
    ) -> Result<reqwest::Response, ClientError> {
        {
            let _refreshing = self.refresh_gate.lock().await;
            // A concurrent request may have rotated the token while we
            // waited on the gate; refresh only if ours is still current.
            if self.store.get(keys::ACCESS_TOKEN) == stale_token {
                if let Err(err) = self.refresh_access_token().await {
                    self.expire_session();
                    return Err(err);
                }
            }
        }

        let token = self.store.get(keys::ACCESS_TOKEN);
        self.dispatch(method, path, body, token.as_deref()).await
    }

    async fn refresh_access_token(&self) -> Result<(), ClientError> {
        let refresh = self
            .store
            .get(keys::REFRESH_TOKEN)
            .ok_or_else(|| ClientError::SessionExpired("no refresh token".into()))?;

        let refreshed = self
            .to_public()
            .refresh(&refresh)
            .await
            .map_err(|err| ClientError::SessionExpired(err.to_string()))?;

        // Same attribute policy as the login-time write.
        self.store
            .set(keys::ACCESS_TOKEN, &refreshed.access, &self.cookies)
            .map_err(|err| ClientError::SessionExpired(err.to_string()))?;
        tracing::debug!("access token refreshed");
        Ok(())
    }

    fn expire_session(&self) {
        for key in [keys::ACCESS_TOKEN, keys::REFRESH_TOKEN, keys::USER_PROFILE] {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!("failed to clear {key}: {err}");
            }
        }
        tracing::warn!("token refresh failed, session expired");
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), url);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Builder for [`CristalClient`] and [`PublicCristalClient`]
pub struct CristalClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    store: Option<Arc<dyn TokenStore>>,
    cookies: CookieAttributes,
    on_session_expired: Option<SessionExpiredHook>,
}

impl CristalClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
            store: None,
            cookies: CookieAttributes::default(),
            on_session_expired: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the request timeout (not supported on WASM)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the token store backing the bearer attachment and refresh path
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the attribute policy used when persisting a refreshed token
    pub fn cookie_attributes(mut self, cookies: CookieAttributes) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the hook fired after an unrecoverable refresh failure
    pub fn on_session_expired(mut self, hook: SessionExpiredHook) -> Self {
        self.on_session_expired = Some(hook);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicCristalClient, ClientError> {
        let base_url = require_base_url(self.base_url)?;
        let client = http_client(self.user_agent, self.timeout)?;
        Ok(PublicCristalClient { client, base_url })
    }

    /// Build an authenticated client
    pub fn build(self) -> Result<CristalClient, ClientError> {
        let base_url = require_base_url(self.base_url)?;
        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("token store is required".into()))?;
        let client = http_client(self.user_agent, self.timeout)?;

        Ok(CristalClient {
            client,
            base_url,
            store,
            cookies: self.cookies,
            refresh_gate: Arc::new(Mutex::new(())),
            on_session_expired: self.on_session_expired,
        })
    }
}

impl Default for CristalClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require_base_url(base_url: Option<String>) -> Result<String, ClientError> {
    let base_url =
        base_url.ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
    Ok(base_url.trim_end_matches('/').to_string())
}

fn http_client(
    user_agent: Option<String>,
    timeout: Option<Duration>,
) -> Result<Client, ClientError> {
    let agent = user_agent.unwrap_or_else(|| USER_AGENT.to_string());

    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(agent).build()?
    };

    Ok(client)
}
