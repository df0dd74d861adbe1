use yew::prelude::*;

use super::{HistoryChart, MeasurementForm, ResultPanel};
use crate::hooks::use_classifier;
use crate::settings;

#[function_component(IrisClassifier)]
pub fn iris_classifier() -> Html {
    let classifier = use_classifier();
    let session = &classifier.session;
    let chart_height = settings::get_settings().chart_height_px;

    html! {
        <div class="p-4 min-h-screen">
            <div class="container mx-auto py-5">
                <div class="card shadow-lg bg-white/80">
                    <div class="card-body">
                        <h1 class="text-center text-3xl font-bold mb-4 text-sky-700">{"Iris Plant Classifier"}</h1>
                        <p class="text-center text-sky-600 mb-5">{"Predict the Iris species by adjusting the values below!"}</p>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <MeasurementForm
                                    measurement={*session.measurement()}
                                    pending={session.is_pending()}
                                    on_edit={classifier.on_edit.clone()}
                                    on_predict={classifier.on_predict.clone()}
                                    on_reset={classifier.on_reset.clone()}
                                />
                                <ResultPanel
                                    result={session.result()}
                                    error={session.error().map(|e| e.to_string())}
                                    pending={session.is_pending()}
                                    on_retry={Some(classifier.on_predict.clone())}
                                />
                            </div>
                            <div>
                                <HistoryChart history={session.history().to_vec()} height={chart_height} />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
