//! API client construction and context
//!
//! One client pair is built at application start and passed down through a
//! context, with the cookie store and the session-expired hook injected
//! explicitly. The hook clears the in-memory session and forces a full
//! navigation to the login view with the `token_expired` indicator.

use crate::auth::{use_auth, AuthAction};
use crate::config::{self, AuthConfig};
use crate::storage::BrowserTokenStore;
use cristal_http::client::SessionExpiredHook;
use cristal_http::{ClientError, CristalClient, PublicCristalClient};
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

struct Clients {
    api: CristalClient,
    public: PublicCristalClient,
}

/// Clients shared through the component tree
#[derive(Clone)]
pub struct ApiContext(Rc<Clients>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ApiContext {
    /// Build the authenticated and public clients against the window origin
    pub fn new(on_session_expired: SessionExpiredHook) -> Result<Self, ClientError> {
        let api = CristalClient::builder()
            .base_url(config::api_base_url())
            .token_store(Arc::new(BrowserTokenStore::new()))
            .cookie_attributes(config::cookie_policy())
            .on_session_expired(on_session_expired)
            .build()?;
        let public = api.to_public();
        Ok(Self(Rc::new(Clients { api, public })))
    }

    /// Client for authenticated resources
    pub fn api(&self) -> &CristalClient {
        &self.0.api
    }

    /// Client for the login and refresh endpoints
    pub fn public(&self) -> &PublicCristalClient {
        &self.0.public
    }
}

/// Hook to use the API clients
#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
        .expect("ApiContext not found. Make sure to wrap your component with ApiProvider")
}

fn redirect_to_login_expired() {
    if let Some(window) = web_sys::window() {
        let href = format!("/login?error={}", AuthConfig::ERROR_TOKEN_EXPIRED);
        if window.location().set_href(&href).is_err() {
            tracing::warn!("failed to navigate to the login view");
        }
    }
}

/// API provider props
#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

/// Provides the API clients; must be rendered inside an `AuthProvider`
#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let auth = use_auth();

    let context = {
        let auth = auth.clone();
        use_memo((), move |_| {
            ApiContext::new(Arc::new(move || {
                auth.dispatch(AuthAction::SessionExpired);
                redirect_to_login_expired();
            }))
        })
    };

    match &*context {
        Ok(context) => html! {
            <ContextProvider<ApiContext> context={context.clone()}>
                <SessionValidator />
                {props.children.clone()}
            </ContextProvider<ApiContext>>
        },
        Err(err) => html! {
            <div class="p-8 text-red-600">
                {format!("Failed to initialize the API client: {err}")}
            </div>
        },
    }
}

/// One-time startup check of a restored session against the backend.
///
/// A rejected whoami behaves exactly like an explicit logout; a transport
/// failure keeps the restored session and lets later requests decide.
#[function_component(SessionValidator)]
fn session_validator() -> Html {
    let auth = use_auth();
    let api = use_api();

    use_effect_with((), move |_| {
        if auth.is_authenticated {
            let client = api.api().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.current_user().await {
                    Ok(profile) => auth.dispatch(AuthAction::ProfileLoaded(profile)),
                    Err(err) if err.is_auth_expired() => {
                        auth.dispatch(AuthAction::Logout);
                    }
                    Err(err) => {
                        tracing::warn!("startup session validation failed: {err}");
                        auth.dispatch(AuthAction::SetLoading(false));
                    }
                }
            });
        }
    });

    html! {}
}
