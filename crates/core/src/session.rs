//! Auth session state
//!
//! A [`Session`] owns the in-memory view of the signed-in user and is the
//! only writer of the persisted credential pair. It is constructed once at
//! application start from an injected [`TokenStore`] and passed explicitly
//! to whoever needs it; there is no ambient global.

use crate::error::CoreResult;
use crate::store::{keys, CookieAttributes, TokenStore};
use crate::types::UserProfile;
use std::sync::Arc;

/// Process-wide authentication state
pub struct Session {
    store: Arc<dyn TokenStore>,
    cookies: CookieAttributes,
    user: Option<UserProfile>,
    authenticated: bool,
}

impl Session {
    /// Restore a session from persisted storage.
    ///
    /// `is_authenticated` is derived from access-token presence. A cached
    /// profile that fails to deserialize is treated as absent, never fatal.
    /// Re-initialization for the same storage state always yields the same
    /// derived state.
    pub fn new(store: Arc<dyn TokenStore>, cookies: CookieAttributes) -> Self {
        let authenticated = store.get(keys::ACCESS_TOKEN).is_some();
        let user = store
            .get(keys::USER_PROFILE)
            .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    tracing::warn!("discarding unparseable cached profile: {err}");
                    None
                }
            });

        Self {
            store,
            cookies,
            user,
            authenticated,
        }
    }

    /// Persist both tokens and the profile, then flip to authenticated.
    ///
    /// The same attribute policy is used here and by the refresh path.
    pub fn login(
        &mut self,
        access: &str,
        refresh: &str,
        user: Option<UserProfile>,
    ) -> CoreResult<()> {
        self.store.set(keys::ACCESS_TOKEN, access, &self.cookies)?;
        self.store.set(keys::REFRESH_TOKEN, refresh, &self.cookies)?;
        match &user {
            Some(profile) => {
                let serialized = serde_json::to_string(profile)?;
                self.store
                    .set(keys::USER_PROFILE, &serialized, &self.cookies)?;
            }
            None => self.store.remove(keys::USER_PROFILE)?,
        }

        self.user = user;
        self.authenticated = true;
        Ok(())
    }

    /// Clear persisted credentials, then flip to unauthenticated.
    ///
    /// Storage removal completes before the state change so a consumer
    /// observing the flip never sees stale persisted tokens. Navigation to
    /// the login view is the caller's job.
    pub fn logout(&mut self) -> CoreResult<()> {
        self.store.remove(keys::ACCESS_TOKEN)?;
        self.store.remove(keys::REFRESH_TOKEN)?;
        self.store.remove(keys::USER_PROFILE)?;

        self.user = None;
        self.authenticated = false;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Shared handle to the underlying store, for wiring up the HTTP client
    pub fn store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    fn session() -> Session {
        Session::new(
            Arc::new(MemoryTokenStore::new()),
            CookieAttributes::strict(false),
        )
    }

    #[test]
    fn login_then_logout_leaves_no_tokens() {
        let mut session = session();
        session.login("a1", "r1", None).unwrap();
        session.logout().unwrap();

        let store = session.store();
        assert_eq!(store.get(keys::ACCESS_TOKEN), None);
        assert_eq!(store.get(keys::REFRESH_TOKEN), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_tokens_and_profile() {
        let mut session = session();
        let profile = UserProfile {
            name: Some("Admin".into()),
            ..UserProfile::default()
        };
        session.login("a1", "r1", Some(profile)).unwrap();

        let store = session.store();
        assert_eq!(store.get(keys::ACCESS_TOKEN), Some("a1".to_string()));
        assert_eq!(store.get(keys::REFRESH_TOKEN), Some("r1".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(session.user().and_then(|u| u.name.as_deref()), Some("Admin"));
    }

    #[test]
    fn initialization_is_idempotent() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        store
            .set(keys::ACCESS_TOKEN, "a1", &CookieAttributes::strict(false))
            .unwrap();

        let first = Session::new(Arc::clone(&store), CookieAttributes::strict(false));
        let second = Session::new(Arc::clone(&store), CookieAttributes::strict(false));
        assert!(first.is_authenticated());
        assert_eq!(first.is_authenticated(), second.is_authenticated());
    }

    #[test]
    fn unparseable_cached_profile_is_treated_as_absent() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let attrs = CookieAttributes::strict(false);
        store.set(keys::ACCESS_TOKEN, "a1", &attrs).unwrap();
        store.set(keys::USER_PROFILE, "{not json", &attrs).unwrap();

        let session = Session::new(store, attrs);
        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }
}
