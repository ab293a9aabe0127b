//! Service catalogue view

use crate::client::use_api;
use cristal_core::types::{NewService, Service};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let api = use_api();
    let services = use_state(Vec::<Service>::new);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    {
        let api = api.clone();
        let services = services.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let client = api.api().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_services().await {
                    Ok(list) => services.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        });
    }

    let onsubmit = {
        let api = api.clone();
        let services = services.clone();
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(price_value) = price.parse::<f64>() else {
                error.set(Some("Price must be a number".to_string()));
                return;
            };
            let new_service = NewService {
                name: (*name).clone(),
                description: (*description).clone(),
                price: price_value,
            };
            let client = api.api().clone();
            let services = services.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.create_service(&new_service).await {
                    Ok(created) => {
                        let mut list = (*services).clone();
                        list.push(created);
                        services.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_price = {
        let price = price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Services"}</h1>
            if let Some(message) = &*error {
                <p class="text-red-500 text-sm">{message}</p>
            }
            <ul class="bg-white rounded-lg shadow-md divide-y">
                {services.iter().map(|service| html! {
                    <li key={service.id} class="px-4 py-2 flex justify-between">
                        <span>{&service.name}</span>
                        <span class="text-gray-500">{format!("${:.2}", service.price)}</span>
                    </li>
                }).collect::<Html>()}
            </ul>
            <form {onsubmit} class="space-y-4 max-w-md">
                <h2 class="text-xl font-bold">{"Add a new service"}</h2>
                <input
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name}
                    placeholder="Service name"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    required=true
                />
                <textarea
                    value={(*description).clone()}
                    oninput={on_description}
                    placeholder="Description"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                />
                <input
                    type="number"
                    value={(*price).clone()}
                    oninput={on_price}
                    placeholder="Price"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    required=true
                />
                <button type="submit" class="px-4 py-2 bg-indigo-600 text-white rounded-md">
                    {"Create service"}
                </button>
            </form>
        </div>
    }
}
