//! Cristal core types and utilities

pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use session::Session;
pub use store::{keys, CookieAttributes, MemoryTokenStore, SameSite, TokenStore};
pub use types::UserProfile;
