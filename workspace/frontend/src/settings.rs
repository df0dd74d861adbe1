use compute::PredictorKind;
use log::Level;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_LOG_LEVEL: &str = "iris_log_level";
const KEY_PREDICTOR: &str = "iris_predictor";
const KEY_LATENCY_MS: &str = "iris_prediction_latency_ms";
const KEY_RNG_SEED: &str = "iris_rng_seed";
const KEY_TOAST_DURATION_MS: &str = "iris_toast_duration_ms";
const KEY_CHART_HEIGHT_PX: &str = "iris_chart_height_px";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Which predictor answers the form
    pub predictor_kind: PredictorKind,

    /// Simulated prediction latency in milliseconds
    pub prediction_latency_ms: u32,

    /// Fixed seed for the random predictor; entropy when absent
    pub rng_seed: Option<u64>,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Height of the history chart in pixels
    pub chart_height_px: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            predictor_kind: PredictorKind::Mock,
            prediction_latency_ms: compute::DEFAULT_LATENCY.as_millis() as u32,
            rng_seed: None,
            toast_duration_ms: 5000,
            chart_height_px: 300,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                settings.apply_overrides(|key| storage.get_item(key).ok().flatten());
            }
        }

        settings
    }

    /// Overrides fields from a key/value source. Missing or unparseable
    /// values keep the current setting.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(KEY_LOG_LEVEL).and_then(|v| parse_log_level(&v)) {
            self.log_level = level;
        }

        if let Some(kind) = lookup(KEY_PREDICTOR) {
            match kind.parse::<PredictorKind>() {
                Ok(kind) => self.predictor_kind = kind,
                Err(e) => log::warn!("Ignoring {}: {}", KEY_PREDICTOR, e),
            }
        }

        if let Some(latency) = lookup(KEY_LATENCY_MS).and_then(|v| v.trim().parse::<u32>().ok()) {
            self.prediction_latency_ms = latency;
        }

        if let Some(seed) = lookup(KEY_RNG_SEED) {
            let seed = seed.trim();
            self.rng_seed = if seed.is_empty() { None } else { seed.parse::<u64>().ok().or(self.rng_seed) };
        }

        if let Some(duration) = lookup(KEY_TOAST_DURATION_MS).and_then(|v| v.trim().parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }

        if let Some(height) = lookup(KEY_CHART_HEIGHT_PX).and_then(|v| v.trim().parse::<u32>().ok()) {
            if height > 0 {
                self.chart_height_px = height;
            }
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(KEY_LOG_LEVEL, &self.log_level.as_str().to_lowercase())?;
                storage.set_item(KEY_PREDICTOR, self.predictor_kind.as_str())?;
                storage.set_item(KEY_LATENCY_MS, &self.prediction_latency_ms.to_string())?;
                match self.rng_seed {
                    Some(seed) => storage.set_item(KEY_RNG_SEED, &seed.to_string())?,
                    None => storage.remove_item(KEY_RNG_SEED)?,
                }
                storage.set_item(KEY_TOAST_DURATION_MS, &self.toast_duration_ms.to_string())?;
                storage.set_item(KEY_CHART_HEIGHT_PX, &self.chart_height_px.to_string())?;
            }
        }
        Ok(())
    }

    pub fn prediction_latency(&self) -> Duration {
        Duration::from_millis(u64::from(self.prediction_latency_ms))
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
