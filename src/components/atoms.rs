use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("bg-white", "rounded-3xl", "shadow-2xl", "p-10", "border", "border-gray-200", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = if props.class.is_empty() {
        classes!("px-8", "py-4", "bg-indigo-600", "hover:bg-indigo-700", "text-white", "font-bold", "rounded-xl", "shadow-lg", "transition", "disabled:opacity-50", "disabled:cursor-not-allowed")
    } else {
        props.class.clone()
    };

    html! {
        <button type="button" {class} onclick={props.onclick.clone()} disabled={props.disabled}>
            { props.label.clone() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub onenter: Callback<()>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };
    let onkeypress = {
        let onenter = props.onenter.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                onenter.emit(());
            }
        })
    };

    html! {
        <label class="flex-1 flex flex-col gap-2">
            <span class="sr-only">{ props.label.clone() }</span>
            <input
                aria-label={props.label.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                {onkeypress}
                class="px-6 py-4 text-lg border-2 border-gray-300 rounded-xl focus:border-indigo-500 focus:outline-none"
            />
        </label>
    }
}

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen">
            <div class="animate-spin rounded-full h-20 w-20 border-8 border-indigo-600 border-t-transparent"></div>
            <p class="mt-8 text-3xl font-bold text-indigo-700">{"Cargando datos del orquestador..."}</p>
        </div>
    }
}
