use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Disables the retry button, e.g. while a retry is already running
    #[prop_or_default]
    pub busy: bool,
}

/// Error panel shown in place of a result.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    html! {
        <div class="mt-4 flex flex-col items-center gap-3">
            <div class="alert alert-error">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{"Prediction failed"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-outline btn-sm"
                        disabled={props.busy}
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
