//! Route guard for protected views

use super::context::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::{LoginQuery, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for authenticated sessions.
///
/// Anonymous visitors are redirected to the login view with the requested
/// path preserved for post-login redirect. Purely derived from the auth
/// context; holds no state of its own.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("RequireAuth must be rendered inside a Router");
    // Preserve the query string too, not just the path.
    let requested =
        use_location().map(|location| format!("{}{}", location.path(), location.query_str()));

    {
        let state = (auth.is_authenticated, auth.is_loading);
        use_effect_with(state, move |(is_authenticated, is_loading)| {
            if !*is_loading && !*is_authenticated {
                let query = LoginQuery {
                    next: requested,
                    error: None,
                };
                if let Err(err) = navigator.push_with_query(&Route::Login, &query) {
                    tracing::warn!("failed to encode login redirect query: {err}");
                    navigator.push(&Route::Login);
                }
            }
        });
    }

    if auth.is_loading {
        html! { <LoadingSpinner text="Restoring session..." /> }
    } else if auth.is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}
