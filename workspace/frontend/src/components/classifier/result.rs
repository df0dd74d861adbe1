use common::Species;
use yew::prelude::*;

use crate::widgets::error::ErrorDisplay;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub result: Option<Species>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub pending: bool,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Last prediction, or the error that replaced it. Renders nothing when
/// neither is present.
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    if let Some(error) = &props.error {
        return html! {
            <ErrorDisplay
                message={error.clone()}
                on_retry={props.on_retry.clone()}
                busy={props.pending}
            />
        };
    }

    match props.result {
        Some(species) => html! {
            <div class="mt-4 p-3 bg-sky-200 rounded text-center">
                <h3 class="text-sky-700 text-lg font-semibold">{"Prediction Result:"}</h3>
                <p class="text-sky-900 text-2xl">{species.to_string()}</p>
            </div>
        },
        None => html! {},
    }
}
