//! Cristal HTTP client
//!
//! Two client types talk to the backend:
//!
//! - [`PublicCristalClient`] for the login and token-refresh endpoints.
//!   It never attaches credentials and is never intercepted, so a refresh
//!   cannot recurse into another refresh.
//! - [`CristalClient`] for every authenticated resource. It attaches the
//!   bearer token from the injected token store and transparently retries
//!   a request exactly once after exchanging the refresh token.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{CristalClient, CristalClientBuilder, PublicCristalClient};
