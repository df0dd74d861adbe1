use yew::prelude::*;

mod components;
pub mod widgets;
pub mod hooks;
pub mod predictor;
pub mod settings;
pub mod state;

use widgets::toast::ToastProvider;
use components::classifier::IrisClassifier;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <IrisClassifier />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Iris Classifier Starting ===");
    log::info!("Application settings: {:?}", settings);

    if settings.debug_mode {
        // Persist the effective settings so they can be tweaked from devtools
        if let Err(e) = settings.save_to_storage() {
            log::warn!("Could not persist settings: {:?}", e);
        }
    }

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
