use common::{HistoryEntry, MeasurementField};
use compute::chart::{history_series, x_axis_ticks, X_AXIS_FIELD};
use plotly::common::{Line, LineShape, Mode, TickMode, Title};
use plotly::layout::{Axis, Margin};
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_DIV_ID: &str = "iris-history-chart";

fn series_color(field: MeasurementField) -> &'static str {
    match field {
        MeasurementField::SepalWidth => "#0284c7",
        MeasurementField::PetalLength => "#0891b2",
        MeasurementField::PetalWidth => "#0e7490",
        MeasurementField::SepalLength => "#0369a1",
    }
}

/// Serializes through JSON so Plotly receives plain JS objects.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Option<JsValue> {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize chart data: {}", e);
            return None;
        }
    };
    match js_sys::JSON::parse(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Failed to parse chart data: {:?}", e);
            None
        }
    }
}

fn draw(history: &[HistoryEntry], height: u32) {
    let ticks = x_axis_ticks(history);
    let traces: Vec<_> = history_series(history)
        .into_iter()
        .map(|series| {
            Scatter::new(series.x, series.y)
                .mode(Mode::LinesMarkers)
                .name(series.field.key())
                .line(
                    Line::new()
                        .color(series_color(series.field))
                        .shape(LineShape::Spline),
                )
        })
        .collect();

    let layout = Layout::new()
        .height(height as usize)
        .margin(Margin::new().top(10).right(10).left(40).bottom(40))
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .x_axis(
            Axis::new()
                .title(Title::from(X_AXIS_FIELD.key()))
                .tick_mode(TickMode::Array)
                .tick_values(ticks.values)
                .tick_text(ticks.labels)
                .grid_color("#bae6fd"),
        )
        .y_axis(Axis::new().grid_color("#bae6fd"));

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let (Some(data), Some(layout), Some(config)) = (to_js(&traces), to_js(&layout), to_js(&config)) else {
        return;
    };

    log::trace!("Redrawing history chart with {} points", history.len());
    newPlot(CHART_DIV_ID, data, layout, config);
}

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub history: Vec<HistoryEntry>,
    #[prop_or(300)]
    pub height: u32,
}

/// Line chart of past inputs: sepal width, petal length and petal width,
/// one point per prediction with its sepal length as the tick label.
#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    let container_ref = use_node_ref();
    let count = props.history.len();

    use_effect_with(
        (container_ref.clone(), props.history.clone(), props.height),
        move |(container_ref, history, height)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(CHART_DIV_ID);
                draw(history, *height);
            }
            || ()
        },
    );

    html! {
        <div>
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-sky-700 text-xl font-semibold">{"Prediction History"}</h2>
                <span class="badge badge-info text-white">
                    {format!("{} prediction{}", count, if count == 1 { "" } else { "s" })}
                </span>
            </div>
            if count == 0 {
                <p class="text-sm text-sky-600 mb-2">
                    <i class="fas fa-chart-line"></i>
                    {" Run a prediction to start the chart."}
                </p>
            }
            <div ref={container_ref} style={format!("width:100%; height:{}px;", props.height)}></div>
        </div>
    }
}
