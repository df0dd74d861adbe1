pub mod chart;
pub mod error;
pub mod predictor;
pub mod session;

#[cfg(test)]
pub mod testing;

use std::time::Duration;

pub use error::{ComputeError, Result};
pub use predictor::{
    CentroidPredictor, DEFAULT_LATENCY, DelayedPredictor, Predictor, PredictorKind,
    RandomPredictor, Timer,
};
pub use session::{Effect, Phase, Session, SessionEvent};

/// Returns the predictor used most of the time: a random label after the
/// default one second latency.
pub fn default_predictor<T: Timer>(timer: T) -> DelayedPredictor<RandomPredictor, T> {
    DelayedPredictor::with_default_latency(RandomPredictor::new(), timer)
}

/// Builds the configured predictor. Latency applies to every kind.
///
/// `seed` only affects [`PredictorKind::Mock`].
pub fn build_predictor<T: Timer + 'static>(
    kind: PredictorKind,
    timer: T,
    latency: Duration,
    seed: Option<u64>,
) -> Box<dyn Predictor> {
    let inner: Box<dyn Predictor> = match kind {
        PredictorKind::Mock => match seed {
            Some(seed) => Box::new(RandomPredictor::with_seed(seed)),
            None => Box::new(RandomPredictor::new()),
        },
        PredictorKind::Centroid => Box::new(CentroidPredictor::new()),
    };
    tracing::info!(%kind, latency_ms = latency.as_millis() as u64, "Predictor configured");
    Box::new(DelayedPredictor::new(inner, timer, latency))
}
