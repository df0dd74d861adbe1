//! Test doubles and drivers shared by the unit tests of this crate.

use async_trait::async_trait;
use common::{Measurement, Species};
use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::error::{ComputeError, Result};
use crate::predictor::{Predictor, Timer};
use crate::session::{Effect, Session, SessionEvent};

/// Installs a test subscriber once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Timer backed by tokio's clock, so `start_paused` tests advance instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Answers with a fixed sequence of labels, cycling when exhausted.
pub struct ScriptedPredictor {
    labels: Vec<Species>,
    calls: Cell<usize>,
}

impl ScriptedPredictor {
    pub fn new(labels: Vec<Species>) -> Self {
        Self {
            labels,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl Predictor for ScriptedPredictor {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn predict(&self, _measurement: &Measurement) -> Result<Species> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.labels.is_empty() {
            return Err(ComputeError::prediction("script is empty"));
        }
        Ok(self.labels[call % self.labels.len()])
    }
}

/// Always fails with the given message.
pub struct FailingPredictor {
    message: String,
}

impl FailingPredictor {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait(?Send)]
impl Predictor for FailingPredictor {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn predict(&self, _measurement: &Measurement) -> Result<Species> {
        Err(ComputeError::Prediction(self.message.clone()))
    }
}

/// Drives one predict round trip the way the UI does: request, await the
/// predictor without holding the session borrow, then feed the outcome back.
///
/// Returns the label on success, `None` when the request was ignored or the
/// predictor failed.
pub async fn run_prediction(
    session: &RefCell<Session>,
    predictor: &dyn Predictor,
) -> Result<Option<Species>> {
    let effect = session
        .borrow_mut()
        .apply(SessionEvent::PredictRequested)?;
    let Effect::StartPrediction(snapshot) = effect else {
        return Ok(None);
    };

    let outcome = predictor.predict(&snapshot).await;
    let species = outcome.as_ref().ok().copied();
    session
        .borrow_mut()
        .apply(SessionEvent::PredictCompleted(outcome))?;
    Ok(species)
}
