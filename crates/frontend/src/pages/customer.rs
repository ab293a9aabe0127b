//! Customer detail view with order history

use crate::client::use_api;
use crate::components::LoadingSpinner;
use cristal_core::types::{Customer, Order};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerPageProps {
    pub username: String,
}

#[function_component(CustomerPage)]
pub fn customer_page(props: &CustomerPageProps) -> Html {
    let api = use_api();
    let customer = use_state(|| Option::<Customer>::None);
    let orders = use_state(Vec::<Order>::new);
    let error = use_state(|| Option::<String>::None);

    {
        let api = api.clone();
        let customer = customer.clone();
        let orders = orders.clone();
        let error = error.clone();
        use_effect_with(props.username.clone(), move |username| {
            let client = api.api().clone();
            let username = username.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.get_customer(&username).await {
                    Ok(record) => customer.set(Some(record)),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        return;
                    }
                }
                match client.customer_orders(&username).await {
                    Ok(history) => orders.set(history),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        });
    }

    if let Some(message) = &*error {
        return html! { <p class="text-red-500">{message}</p> };
    }

    let Some(record) = &*customer else {
        return html! { <LoadingSpinner text="Loading customer..." /> };
    };

    html! {
        <div class="p-8">
            <h1 class="text-3xl font-bold mb-6">
                {format!("Welcome, {} {}", record.first_name, record.last_name)}
            </h1>
            <div class="bg-white p-6 rounded-lg shadow-md">
                <p class="text-gray-700">
                    <strong>{"Phone: "}</strong>{record.phone.as_deref().unwrap_or("-")}
                </p>
                <p class="text-gray-700">
                    <strong>{"Address: "}</strong>{record.address.as_deref().unwrap_or("-")}
                </p>
            </div>
            <h2 class="text-2xl font-bold mt-8 mb-4">{"Order history"}</h2>
            <table class="min-w-full bg-white border border-gray-300">
                <thead>
                    <tr>
                        <th class="py-2 px-4 border-b">{"ID"}</th>
                        <th class="py-2 px-4 border-b">{"Status"}</th>
                        <th class="py-2 px-4 border-b">{"Total"}</th>
                    </tr>
                </thead>
                <tbody>
                    {orders.iter().map(|order| html! {
                        <tr key={order.id}>
                            <td class="py-2 px-4 border-b">{order.id}</td>
                            <td class="py-2 px-4 border-b">{&order.status}</td>
                            <td class="py-2 px-4 border-b">{format!("${:.2}", order.total_amount)}</td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}
