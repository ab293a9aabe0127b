//! Token storage abstraction
//!
//! A [`TokenStore`] is a pure storage adapter for the persisted credential
//! pair and the cached user profile. It knows nothing about the network or
//! the session; the same attribute policy is applied to login-time and
//! refresh-time writes by passing [`CookieAttributes`] explicitly.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Well-known entry names used by the session layer
pub mod keys {
    /// Short-lived bearer credential
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Longer-lived credential exchanged for a new access token
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// Serialized cached user profile
    pub const USER_PROFILE: &str = "user";
}

/// SameSite policy for cookie-backed stores
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    /// Attribute value as it appears in a Set-Cookie style string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attributes applied to every persisted entry
///
/// One policy is used for all writes so that login and refresh never
/// disagree on scope or security flags.
#[derive(Clone, Debug, PartialEq)]
pub struct CookieAttributes {
    /// Path scope, normally `/`
    pub path: String,
    /// HTTPS-only flag
    pub secure: bool,
    /// SameSite policy
    pub same_site: SameSite,
    /// Expiry in days; `None` means a session-scoped entry
    pub max_age_days: Option<u32>,
}

impl CookieAttributes {
    /// Policy used by the application: root path, strict same-site,
    /// session-scoped lifetime. `secure` is environment-dependent and
    /// supplied by the caller (true everywhere except plain-HTTP localhost).
    pub fn strict(secure: bool) -> Self {
        Self {
            path: "/".to_string(),
            secure,
            same_site: SameSite::Strict,
            max_age_days: None,
        }
    }
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self::strict(true)
    }
}

/// Storage adapter for tokens and the cached profile
pub trait TokenStore {
    /// Read an entry; absent entries return `None`
    fn get(&self, name: &str) -> Option<String>;

    /// Write an entry with the given attribute policy
    fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) -> CoreResult<()>;

    /// Delete an entry immediately; a subsequent `get` returns `None`
    fn remove(&self, name: &str) -> CoreResult<()>;
}

/// In-memory store used on native targets and in tests
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str, _attributes: &CookieAttributes) -> CoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::storage("token store lock poisoned"))?;
        entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> CoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::storage("token store lock poisoned"))?;
        entries.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let store = MemoryTokenStore::new();
        store
            .set(keys::ACCESS_TOKEN, "a1", &CookieAttributes::default())
            .unwrap();
        assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a1".to_string()));
    }

    #[test]
    fn remove_deletes_immediately() {
        let store = MemoryTokenStore::new();
        store
            .set(keys::REFRESH_TOKEN, "r1", &CookieAttributes::default())
            .unwrap();
        store.remove(keys::REFRESH_TOKEN).unwrap();
        assert_eq!(store.get(keys::REFRESH_TOKEN), None);
    }

    #[test]
    fn get_absent_entry_is_none() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    }

    #[test]
    fn strict_policy_uses_root_path() {
        let attrs = CookieAttributes::strict(true);
        assert_eq!(attrs.path, "/");
        assert_eq!(attrs.same_site, SameSite::Strict);
        assert!(attrs.secure);
        assert_eq!(attrs.max_age_days, None);
    }
}
