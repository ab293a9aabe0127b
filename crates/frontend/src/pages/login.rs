//! Login view

use crate::auth::{use_auth, AuthAction};
use crate::client::use_api;
use crate::config::AuthConfig;
use crate::routes::{login_redirect_target, LoginQuery};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator().expect("LoginPage must be rendered inside a Router");
    let location = use_location();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let query = location
        .as_ref()
        .and_then(|location| location.query::<LoginQuery>().ok())
        .unwrap_or_default();
    let session_expired = query.error.as_deref() == Some(AuthConfig::ERROR_TOKEN_EXPIRED);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = auth.clone();
        let api = api.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let next = query.next.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let public = api.public().clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let next = next.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match public.login(username, password).await {
                    Ok(response) => {
                        auth.dispatch(AuthAction::Login {
                            access: response.access,
                            refresh: response.refresh,
                            user: response.user,
                        });
                        let (target, query) = login_redirect_target(next.as_deref());
                        if query.is_empty() {
                            navigator.push(&target);
                        } else if let Err(err) = navigator.push_with_query(&target, &query) {
                            tracing::warn!("failed to encode redirect query: {err}");
                            navigator.push(&target);
                        }
                    }
                    Err(err) if err.is_invalid_credentials() => {
                        error.set(Some("Invalid credentials. Please try again.".to_string()));
                    }
                    Err(err) => {
                        tracing::warn!("login request failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="w-full max-w-md p-8 space-y-6 bg-white rounded-lg shadow-md">
                <h2 class="text-2xl font-bold text-center text-gray-800">{"Sign in"}</h2>
                if session_expired {
                    <p class="text-yellow-600 text-center text-sm">
                        {"Your session has expired. Please sign in again."}
                    </p>
                }
                if let Some(message) = &*error {
                    <p class="text-red-500 text-center text-sm">{message}</p>
                }
                <form {onsubmit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Username"}</label>
                        <input
                            type="text"
                            value={(*username).clone()}
                            oninput={on_username}
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="Username"
                            required=true
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password}
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="Password"
                            required=true
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-white bg-indigo-600 hover:bg-indigo-700"
                    >
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
