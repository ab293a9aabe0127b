//! Application shell

use crate::auth::{use_is_authenticated, AuthProvider};
use crate::client::ApiProvider;
use crate::components::Sidebar;
use crate::routes::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <ApiProvider>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </ApiProvider>
        </AuthProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <div class="flex h-screen">
            if is_authenticated {
                <Sidebar />
            }
            <div class="flex-1 overflow-y-auto bg-gray-100 p-6">
                <Switch<Route> render={switch} />
            </div>
        </div>
    }
}
