//! Global authentication context and provider
//!
//! The provider restores the session from the cookie store synchronously
//! on construction; `is_loading` stays true for restored sessions until
//! the one-time whoami validation settles.

use crate::config;
use crate::storage::BrowserTokenStore;
use cristal_core::types::UserProfile;
use cristal_core::Session;
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

/// Snapshot of the session exposed to components
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    /// Successful login: persist the token pair and profile
    Login {
        access: String,
        refresh: String,
        user: Option<UserProfile>,
    },
    /// Explicit logout. Navigation afterwards is the caller's job.
    Logout,
    /// Token refresh failed mid-session; the client already cleared storage
    SessionExpired,
    /// Replace the cached profile after a successful whoami check
    ProfileLoaded(UserProfile),
    SetLoading(bool),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

fn browser_session() -> Session {
    Session::new(Arc::new(BrowserTokenStore::new()), config::cookie_policy())
}

impl Default for AuthContextData {
    fn default() -> Self {
        let session = browser_session();
        let is_authenticated = session.is_authenticated();
        Self {
            user: session.user().cloned(),
            is_authenticated,
            // Restored sessions are validated against the backend once.
            is_loading: is_authenticated,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login {
                access,
                refresh,
                user,
            } => {
                let mut session = browser_session();
                if let Err(err) = session.login(&access, &refresh, user) {
                    tracing::error!("failed to persist session: {err}");
                    return self;
                }
                Rc::new(Self {
                    user: session.user().cloned(),
                    is_authenticated: true,
                    is_loading: false,
                })
            }
            AuthAction::Logout => {
                let mut session = browser_session();
                if let Err(err) = session.logout() {
                    tracing::warn!("failed to clear persisted session: {err}");
                }
                Rc::new(Self {
                    user: None,
                    is_authenticated: false,
                    is_loading: false,
                })
            }
            AuthAction::SessionExpired => Rc::new(Self {
                user: None,
                is_authenticated: false,
                is_loading: false,
            }),
            AuthAction::ProfileLoaded(profile) => Rc::new(Self {
                user: Some(profile),
                is_authenticated: self.is_authenticated,
                is_loading: false,
            }),
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current user profile, if any
#[hook]
pub fn use_auth_state() -> Option<UserProfile> {
    let auth = use_auth();
    auth.user.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.is_authenticated
}
