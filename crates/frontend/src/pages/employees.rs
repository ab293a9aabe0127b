//! Employees view

use crate::client::use_api;
use cristal_core::types::{Employee, JobPosition, NewEmployee, NewEmployeeUser};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct EmployeeForm {
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    position: String,
}

#[function_component(EmployeesPage)]
pub fn employees_page() -> Html {
    let api = use_api();
    let employees = use_state(Vec::<Employee>::new);
    let positions = use_state(Vec::<JobPosition>::new);
    let form = use_state(EmployeeForm::default);
    let error = use_state(|| Option::<String>::None);

    {
        let api = api.clone();
        let employees = employees.clone();
        let positions = positions.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let client = api.api().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_employees().await {
                    Ok(list) => employees.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                match client.list_positions().await {
                    Ok(list) => positions.set(list),
                    Err(err) => tracing::warn!("failed to load positions: {err}"),
                }
            });
        });
    }

    let edit = |field: fn(&mut EmployeeForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            field(&mut updated, input.value());
            form.set(updated);
        })
    };

    let on_position = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.position = select.value();
            form.set(updated);
        })
    };

    let onsubmit = {
        let api = api.clone();
        let employees = employees.clone();
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = (*form).clone();
            let new_employee = NewEmployee {
                user: NewEmployeeUser {
                    username: fields.username,
                    email: fields.email,
                    password: fields.password,
                    first_name: fields.first_name,
                    last_name: fields.last_name,
                },
                position: fields.position,
            };
            let client = api.api().clone();
            let employees = employees.clone();
            let form = form.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.create_employee(&new_employee).await {
                    Ok(created) => {
                        let mut list = (*employees).clone();
                        list.push(created);
                        employees.set(list);
                        form.set(EmployeeForm::default());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Employees"}</h1>
            if let Some(message) = &*error {
                <p class="text-red-500 text-sm">{message}</p>
            }
            <table class="min-w-full bg-white rounded-lg shadow-md">
                <thead>
                    <tr>
                        <th class="py-2 px-4 text-left">{"Username"}</th>
                        <th class="py-2 px-4 text-left">{"Name"}</th>
                        <th class="py-2 px-4 text-left">{"Position"}</th>
                    </tr>
                </thead>
                <tbody>
                    {employees.iter().map(|employee| html! {
                        <tr key={employee.id}>
                            <td class="py-2 px-4 border-t">{&employee.username}</td>
                            <td class="py-2 px-4 border-t">
                                {format!("{} {}", employee.first_name, employee.last_name)}
                            </td>
                            <td class="py-2 px-4 border-t">{&employee.position}</td>
                        </tr>
                    }).collect::<Html>()}
                </tbody>
            </table>
            <form {onsubmit} class="space-y-4 max-w-md">
                <h2 class="text-xl font-bold">{"Register a new employee"}</h2>
                <input type="text" value={form.username.clone()}
                    oninput={edit(|f, v| f.username = v)}
                    placeholder="Username"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" required=true />
                <input type="email" value={form.email.clone()}
                    oninput={edit(|f, v| f.email = v)}
                    placeholder="Email"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" required=true />
                <input type="password" value={form.password.clone()}
                    oninput={edit(|f, v| f.password = v)}
                    placeholder="Password"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" required=true />
                <input type="text" value={form.first_name.clone()}
                    oninput={edit(|f, v| f.first_name = v)}
                    placeholder="First name"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                <input type="text" value={form.last_name.clone()}
                    oninput={edit(|f, v| f.last_name = v)}
                    placeholder="Last name"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                <select onchange={on_position} value={form.position.clone()}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md">
                    <option value="" selected={form.position.is_empty()}>{"Select a position"}</option>
                    {positions.iter().map(|position| html! {
                        <option key={position.id} value={position.name.clone()}
                            selected={form.position == position.name}>
                            {&position.name}
                        </option>
                    }).collect::<Html>()}
                </select>
                <button type="submit" class="px-4 py-2 bg-indigo-600 text-white rounded-md">
                    {"Register employee"}
                </button>
            </form>
        </div>
    }
}
