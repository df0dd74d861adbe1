use common::{format_value, Measurement, MeasurementField};
use yew::prelude::*;

use crate::widgets::loading::Spinner;

#[derive(Properties, PartialEq)]
pub struct MeasurementFormProps {
    pub measurement: Measurement,
    pub pending: bool,
    pub on_edit: Callback<(MeasurementField, String)>,
    pub on_predict: Callback<()>,
    pub on_reset: Callback<()>,
}

/// One dropdown per measurement field plus the predict and reset controls.
#[function_component(MeasurementForm)]
pub fn measurement_form(props: &MeasurementFormProps) -> Html {
    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_predict.emit(());
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_reset.emit(());
        })
    };

    html! {
        <form class="space-y-3">
            {for MeasurementField::ALL.into_iter().map(|field| {
                html! {
                    <FieldSelect
                        key={field.key()}
                        field={field}
                        value={props.measurement.get(field)}
                        on_edit={props.on_edit.clone()}
                    />
                }
            })}
            <div class="flex justify-center gap-2 mt-4">
                <button
                    type="button"
                    class="btn btn-info text-white"
                    onclick={on_predict}
                    disabled={props.pending}
                >
                    if props.pending {
                        <Spinner />
                        {"Predicting..."}
                    } else {
                        {"Predict"}
                    }
                </button>
                <button type="button" class="btn btn-error text-white" onclick={on_reset}>
                    {"Reset"}
                </button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FieldSelectProps {
    field: MeasurementField,
    value: f64,
    on_edit: Callback<(MeasurementField, String)>,
}

#[function_component(FieldSelect)]
fn field_select(props: &FieldSelectProps) -> Html {
    let field = props.field;
    let options = use_memo(field, |field| {
        field
            .range()
            .options()
            .into_iter()
            .map(format_value)
            .collect::<Vec<String>>()
    });
    let current = format_value(props.value);

    let onchange = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_edit.emit((field, target.value()));
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text text-sky-700">{field.label()}</span>
            </label>
            <select
                name={field.key()}
                class="select select-bordered w-full bg-sky-100 border-sky-300 text-sky-900"
                {onchange}
            >
                {for options.iter().map(|option| {
                    html! {
                        <option key={option.clone()} value={option.clone()} selected={*option == current}>
                            {option.clone()}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
