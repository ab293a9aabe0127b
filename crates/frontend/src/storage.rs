//! Browser-backed token store
//!
//! Credentials are persisted as cookies so the path/secure/same-site
//! attributes apply to them; non-credential entries (the cached profile)
//! go to localStorage.

use cristal_core::error::{CoreError, CoreResult};
use cristal_core::store::{keys, CookieAttributes, TokenStore};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Token store over `document.cookie` and `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> CoreResult<HtmlDocument> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| CoreError::storage("document is not available"))
    }

    fn is_credential(name: &str) -> bool {
        matches!(name, keys::ACCESS_TOKEN | keys::REFRESH_TOKEN)
    }

    fn cookie_get(name: &str) -> Option<String> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        cookies.split(';').map(str::trim).find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    }

    fn cookie_set(name: &str, value: &str, attributes: &CookieAttributes) -> CoreResult<()> {
        let mut cookie = format!(
            "{name}={value}; Path={}; SameSite={}",
            attributes.path,
            attributes.same_site.as_str()
        );
        if let Some(days) = attributes.max_age_days {
            cookie.push_str(&format!("; Max-Age={}", u64::from(days) * 86_400));
        }
        if attributes.secure {
            cookie.push_str("; Secure");
        }
        Self::document()?
            .set_cookie(&cookie)
            .map_err(|_| CoreError::storage(format!("failed to write cookie {name}")))
    }

    fn cookie_remove(name: &str) -> CoreResult<()> {
        // Expiring the cookie under the same path deletes it immediately.
        Self::document()?
            .set_cookie(&format!("{name}=; Path=/; Max-Age=0"))
            .map_err(|_| CoreError::storage(format!("failed to remove cookie {name}")))
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, name: &str) -> Option<String> {
        if Self::is_credential(name) {
            Self::cookie_get(name)
        } else {
            LocalStorage::get::<String>(name).ok()
        }
    }

    fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) -> CoreResult<()> {
        if Self::is_credential(name) {
            Self::cookie_set(name, value, attributes)
        } else {
            LocalStorage::set(name, value.to_string())
                .map_err(|err| CoreError::storage(err.to_string()))
        }
    }

    fn remove(&self, name: &str) -> CoreResult<()> {
        if Self::is_credential(name) {
            Self::cookie_remove(name)
        } else {
            LocalStorage::delete(name);
            Ok(())
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn credentials_round_trip_through_cookies() {
        let store = BrowserTokenStore::new();
        let attrs = CookieAttributes::strict(false);

        store.set(keys::ACCESS_TOKEN, "a1", &attrs).unwrap();
        assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a1".to_string()));

        store.remove(keys::ACCESS_TOKEN).unwrap();
        assert_eq!(store.get(keys::ACCESS_TOKEN), None);
    }

    #[wasm_bindgen_test]
    fn profile_round_trips_through_local_storage() {
        let store = BrowserTokenStore::new();
        let attrs = CookieAttributes::strict(false);

        store.set(keys::USER_PROFILE, r#"{"name":"Admin"}"#, &attrs).unwrap();
        assert_eq!(
            store.get(keys::USER_PROFILE),
            Some(r#"{"name":"Admin"}"#.to_string())
        );

        store.remove(keys::USER_PROFILE).unwrap();
        assert_eq!(store.get(keys::USER_PROFILE), None);
    }
}
