//! Orders view

use crate::client::use_api;
use cristal_core::types::{NewOrder, Order, OrderLine};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let api = use_api();
    let orders = use_state(Vec::<Order>::new);
    let customer = use_state(String::new);
    let lines = use_state(Vec::<OrderLine>::new);
    let note = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    {
        let api = api.clone();
        let orders = orders.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let client = api.api().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_orders().await {
                    Ok(list) => orders.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        });
    }

    let on_add_line = {
        let lines = lines.clone();
        Callback::from(move |_| {
            let mut updated = (*lines).clone();
            updated.push(OrderLine {
                service: 0,
                quantity: 1,
            });
            lines.set(updated);
        })
    };

    let edit_line = |index: usize, lines: &UseStateHandle<Vec<OrderLine>>, is_service: bool| {
        let lines = lines.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*lines).clone();
            if let Some(line) = updated.get_mut(index) {
                if is_service {
                    line.service = input.value().parse().unwrap_or(0);
                } else {
                    line.quantity = input.value().parse().unwrap_or(1);
                }
            }
            lines.set(updated);
        })
    };

    let on_customer = {
        let customer = customer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            customer.set(input.value());
        })
    };
    let on_note = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let onsubmit = {
        let api = api.clone();
        let orders = orders.clone();
        let customer = customer.clone();
        let lines = lines.clone();
        let note = note.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(customer_id) = customer.parse::<i64>() else {
                error.set(Some("Customer must be a numeric id".to_string()));
                return;
            };
            let new_order = NewOrder {
                customer: customer_id,
                services: (*lines).clone(),
                note: (*note).clone(),
            };
            let client = api.api().clone();
            let orders = orders.clone();
            let lines = lines.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.create_order(&new_order).await {
                    Ok(created) => {
                        let mut list = (*orders).clone();
                        list.push(created);
                        orders.set(list);
                        lines.set(Vec::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Orders"}</h1>
            if let Some(message) = &*error {
                <p class="text-red-500 text-sm">{message}</p>
            }
            <table class="min-w-full bg-white rounded-lg shadow-md">
                <thead>
                    <tr>
                        <th class="py-2 px-4 text-left">{"ID"}</th>
                        <th class="py-2 px-4 text-left">{"Status"}</th>
                        <th class="py-2 px-4 text-left">{"Total"}</th>
                    </tr>
                </thead>
                <tbody>
                    {orders.iter().map(|order| html! {
                        <tr key={order.id}>
                            <td class="py-2 px-4 border-t">{order.id}</td>
                            <td class="py-2 px-4 border-t">{&order.status}</td>
                            <td class="py-2 px-4 border-t">{format!("${:.2}", order.total_amount)}</td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
            <form {onsubmit} class="space-y-4 max-w-md">
                <h2 class="text-xl font-bold">{"Create a new order"}</h2>
                <input type="number" value={(*customer).clone()} oninput={on_customer}
                    placeholder="Customer id"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" required=true />
                {lines.iter().enumerate().map(|(index, line)| html! {
                    <div key={index} class="flex space-x-2">
                        <input type="number" value={line.service.to_string()}
                            oninput={edit_line(index, &lines, true)}
                            placeholder="Service id"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                        <input type="number" value={line.quantity.to_string()}
                            oninput={edit_line(index, &lines, false)}
                            placeholder="Quantity"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                    </div>
                }).collect::<Html>()}
                <button type="button" onclick={on_add_line}
                    class="px-4 py-2 bg-green-600 text-white rounded-md">
                    {"Add service line"}
                </button>
                <textarea value={(*note).clone()} oninput={on_note}
                    placeholder="Additional notes"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                <button type="submit" class="px-4 py-2 bg-indigo-600 text-white rounded-md">
                    {"Create order"}
                </button>
            </form>
        </div>
    }
}
