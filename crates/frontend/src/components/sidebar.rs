//! Navigation sidebar with profile menu
//!
//! Rendered only for authenticated sessions; the shell hides it otherwise.

use crate::auth::{use_auth, AuthAction};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAVIGATION: &[(&str, Route)] = &[
    ("Dashboard", Route::Dashboard),
    ("Employees", Route::Employees),
    ("Orders", Route::Orders),
    ("Services", Route::Services),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("Sidebar must be rendered inside a Router");
    let menu_open = use_state(|| false);

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
            navigator.push(&Route::Login);
        })
    };

    let user = auth.user.clone().unwrap_or_default();
    let display_name = user.name.as_deref().unwrap_or("Signed in").to_string();

    html! {
        <aside class="w-64 flex flex-col bg-gray-900 text-gray-100">
            <div class="p-4 text-lg font-bold">{"Cristal"}</div>

            <nav class="flex-1 px-2 space-y-1">
                {NAVIGATION.iter().map(|(name, route)| html! {
                    <Link<Route>
                        to={route.clone()}
                        classes="block px-3 py-2 rounded-md hover:bg-gray-700"
                    >
                        {*name}
                    </Link<Route>>
                }).collect::<Html>()}
            </nav>

            <div class="p-4 border-t border-gray-700">
                <button class="flex items-center w-full text-left" onclick={on_toggle_menu}>
                    if let Some(avatar) = &user.avatar {
                        <img src={avatar.clone()} class="w-8 h-8 rounded-full mr-2" alt="avatar" />
                    }
                    <div>
                        <div class="text-sm font-medium">{display_name}</div>
                        if let Some(role) = &user.role {
                            <div class="text-xs text-gray-400">{role.clone()}</div>
                        }
                    </div>
                </button>
                if *menu_open {
                    <div class="mt-2">
                        <button
                            onclick={on_logout}
                            class="block w-full text-left px-3 py-2 text-sm rounded-md hover:bg-gray-700"
                        >
                            {"Log out"}
                        </button>
                    </div>
                }
            </div>
        </aside>
    }
}
