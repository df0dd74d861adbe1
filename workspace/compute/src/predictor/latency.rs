use async_trait::async_trait;
use common::{Measurement, Species};
use std::time::Duration;
use tracing::{debug, instrument};

use super::Predictor;
use crate::error::Result;

/// Delay before a simulated prediction resolves.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Source of timed suspension.
///
/// The browser build backs this with `gloo-timers`, tests with tokio's clock.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Wraps any predictor and holds every answer back for a fixed latency.
///
/// The wait always runs to completion before the inner predictor is asked;
/// there is no cancellation.
pub struct DelayedPredictor<P: Predictor, T: Timer> {
    /// The wrapped predictor
    inner: P,
    timer: T,
    latency: Duration,
}

impl<P: Predictor, T: Timer> DelayedPredictor<P, T> {
    pub fn new(inner: P, timer: T, latency: Duration) -> Self {
        Self {
            inner,
            timer,
            latency,
        }
    }

    pub fn with_default_latency(inner: P, timer: T) -> Self {
        Self::new(inner, timer, DEFAULT_LATENCY)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait(?Send)]
impl<P: Predictor, T: Timer> Predictor for DelayedPredictor<P, T> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    #[instrument(skip(self))]
    async fn predict(&self, measurement: &Measurement) -> Result<Species> {
        debug!(
            predictor = self.inner.name(),
            latency_ms = self.latency.as_millis() as u64,
            "Simulating prediction latency"
        );
        self.timer.sleep(self.latency).await;
        self.inner.predict(measurement).await
    }
}
