use super::atoms::{Button, Card, TextInput};
use crate::config::DashboardConfig;
use crate::format::format_currency;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum CardColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
}

impl CardColor {
    fn background(self) -> &'static str {
        match self {
            CardColor::Blue => "bg-blue-100",
            CardColor::Green => "bg-green-100",
            CardColor::Red => "bg-red-100",
            CardColor::Yellow => "bg-yellow-100",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub title: AttrValue,
    pub value: Option<f64>,
    #[prop_or_default]
    pub color: CardColor,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    html! {
        <Card class={classes!(props.color.background(), "text-center")}>
            <p class="text-lg opacity-80">{ props.title.clone() }</p>
            <p class="text-4xl font-bold mt-2">
                { format_currency(props.value, &config.currency_prefix, config.locale) }
            </p>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SearchForm)]
pub fn search_form(props: &SearchFormProps) -> Html {
    let ci = use_state(String::new);

    let submit = {
        let ci = ci.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: ()| {
            let query = ci.trim();
            if !query.is_empty() {
                on_search.emit(query.to_string());
            }
        })
    };
    let on_input = {
        let ci = ci.clone();
        Callback::from(move |value: String| ci.set(value))
    };
    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    html! {
        <div class="max-w-2xl mx-auto mb-12">
            <div class="bg-white rounded-2xl shadow-2xl p-10">
                <h2 class="text-3xl font-bold text-center mb-8">{"Buscar por CI"}</h2>
                <div class="flex gap-4">
                    <TextInput
                        label="CI del cliente"
                        placeholder="Ej: 32320"
                        value={(*ci).clone()}
                        oninput={on_input}
                        onenter={submit}
                    />
                    <Button
                        label="Buscar"
                        onclick={on_click}
                        disabled={props.disabled || ci.trim().is_empty()}
                    />
                </div>
            </div>
        </div>
    }
}
