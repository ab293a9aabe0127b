//! Dashboard view

use crate::auth::use_auth_state;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_auth_state();
    let greeting = user
        .and_then(|profile| profile.name)
        .map(|name| format!("Welcome back, {name}"))
        .unwrap_or_else(|| "Welcome back".to_string());

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{greeting}</h1>
            <div class="grid grid-cols-3 gap-4">
                <Link<Route> to={Route::Employees} classes="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-lg font-semibold">{"Employees"}</h2>
                    <p class="text-sm text-gray-500">{"Manage staff accounts and positions"}</p>
                </Link<Route>>
                <Link<Route> to={Route::Orders} classes="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-lg font-semibold">{"Orders"}</h2>
                    <p class="text-sm text-gray-500">{"Track and create customer orders"}</p>
                </Link<Route>>
                <Link<Route> to={Route::Services} classes="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-lg font-semibold">{"Services"}</h2>
                    <p class="text-sm text-gray-500">{"Maintain the service catalogue"}</p>
                </Link<Route>>
            </div>
        </div>
    }
}
