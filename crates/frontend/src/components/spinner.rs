//! Loading indicator shown while the session or a view settles

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Optional caption rendered under the spinner
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-10">
            <div class="w-10 h-10 rounded-full border-4 border-gray-200 border-t-indigo-600 animate-spin"></div>
            if let Some(text) = &props.text {
                <p class="mt-4 text-sm text-gray-600">{text}</p>
            }
        </div>
    }
}
