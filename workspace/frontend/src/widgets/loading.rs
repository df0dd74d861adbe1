use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Small inline spinner for busy controls.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <span class={classes!("loading", "loading-spinner", "loading-sm", props.class.clone())}></span>
    }
}
