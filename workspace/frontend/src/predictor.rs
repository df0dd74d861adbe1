use async_trait::async_trait;
use compute::{Predictor, Timer};
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

use crate::settings::AppSettings;

/// Browser timer driving the simulated prediction latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Builds the predictor selected in the settings.
pub fn from_settings(settings: &AppSettings) -> Box<dyn Predictor> {
    log::debug!(
        "Building {} predictor with {} ms latency",
        settings.predictor_kind,
        settings.prediction_latency_ms
    );
    compute::build_predictor(
        settings.predictor_kind,
        GlooTimer,
        settings.prediction_latency(),
        settings.rng_seed,
    )
}
