//! Session state for one classifier page.
//!
//! The session owns the live measurement, the in-flight flag, the last
//! result and the prediction history. All changes go through
//! [`Session::apply`], which keeps the state machine
//!
//! ```text
//! idle --PredictRequested--> pending --PredictCompleted--> idle (result set)
//! idle (result set) --Reset--> idle (result empty)
//! ```
//!
//! independent of any rendering layer.

use common::{HistoryEntry, Measurement, MeasurementError, MeasurementField, Species};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};

/// Whether a prediction is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Waiting for the predictor; holds the measurement captured at request time.
    Pending { request_id: u64, snapshot: Measurement },
}

/// Input to the session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The user picked a new value for one field
    Edit { field: MeasurementField, value: f64 },
    /// The user pressed the predict trigger
    PredictRequested,
    /// The predictor answered
    PredictCompleted(Result<Species>),
    /// The user pressed reset
    Reset,
}

/// Work the caller has to perform after an event was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the predictor on this measurement and feed the outcome back as
    /// [`SessionEvent::PredictCompleted`].
    StartPrediction(Measurement),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    measurement: Measurement,
    phase: Phase,
    result: Option<Species>,
    error: Option<ComputeError>,
    history: Vec<HistoryEntry>,
    requests: u64,
    settled: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_measurement(measurement: Measurement) -> Self {
        Self {
            measurement,
            ..Self::default()
        }
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Id and snapshot of the in-flight request, if any.
    pub fn pending_request(&self) -> Option<(u64, Measurement)> {
        match self.phase {
            Phase::Pending {
                request_id,
                snapshot,
            } => Some((request_id, snapshot)),
            Phase::Idle => None,
        }
    }

    /// Label of the last successful prediction, until reset.
    pub fn result(&self) -> Option<Species> {
        self.result
    }

    /// Failure of the last prediction, until the next success or a reset.
    pub fn error(&self) -> Option<&ComputeError> {
        self.error.as_ref()
    }

    /// Completed predictions in the order they finished.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of completions accepted so far, successful or not.
    pub fn settled(&self) -> u64 {
        self.settled
    }

    /// Applies one event and reports what the caller must do next.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Effect> {
        match event {
            SessionEvent::Edit { field, value } => {
                self.edit(field, value)?;
                Ok(Effect::None)
            }
            SessionEvent::PredictRequested => Ok(self.request_prediction()),
            SessionEvent::PredictCompleted(outcome) => {
                self.complete_prediction(outcome)?;
                Ok(Effect::None)
            }
            SessionEvent::Reset => {
                self.reset();
                Ok(Effect::None)
            }
        }
    }

    /// Replaces exactly one field of the live measurement.
    ///
    /// Allowed while a prediction is pending; the pending prediction keeps
    /// the snapshot taken when it was requested.
    pub fn edit(&mut self, field: MeasurementField, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MeasurementError::InvalidValue {
                field,
                input: value.to_string(),
            }
            .into());
        }
        if !field.range().contains(value) {
            warn!(%field, value, "Value outside the selectable range");
        }

        debug!(%field, value, "Measurement edited");
        self.measurement.set(field, value);
        Ok(())
    }

    /// Parses a raw form value and applies it to `field`.
    pub fn edit_input(&mut self, field: MeasurementField, input: &str) -> Result<()> {
        let value = field.parse_value(input)?;
        self.edit(field, value)
    }

    /// Enters the pending state. A request while already pending does nothing.
    #[instrument(skip(self))]
    pub fn request_prediction(&mut self) -> Effect {
        if let Phase::Pending { .. } = self.phase {
            debug!("Prediction already pending, ignoring request");
            return Effect::None;
        }

        self.requests += 1;
        let snapshot = self.measurement;
        self.phase = Phase::Pending {
            request_id: self.requests,
            snapshot,
        };
        info!(request_id = self.requests, ?snapshot, "Prediction requested");
        Effect::StartPrediction(snapshot)
    }

    /// Leaves the pending state with the predictor's outcome.
    ///
    /// A success sets the result and appends the snapshot with its label to
    /// the history. A failure clears the result and records the error
    /// without touching the history.
    #[instrument(skip(self))]
    pub fn complete_prediction(&mut self, outcome: Result<Species>) -> Result<()> {
        let snapshot = match std::mem::take(&mut self.phase) {
            Phase::Pending { snapshot, .. } => snapshot,
            Phase::Idle => {
                warn!("Prediction completed while idle");
                return Err(ComputeError::NotPending);
            }
        };
        self.settled += 1;

        match outcome {
            Ok(species) => {
                info!(%species, history_len = self.history.len() + 1, "Prediction completed");
                self.result = Some(species);
                self.error = None;
                self.history.push(HistoryEntry::new(snapshot, species));
            }
            Err(err) => {
                warn!(%err, "Prediction failed");
                self.result = None;
                self.error = Some(err);
            }
        }
        Ok(())
    }

    /// Clears the displayed result. Measurement and history are kept.
    pub fn reset(&mut self) {
        if self.result.is_some() || self.error.is_some() {
            debug!("Result cleared");
        }
        self.result = None;
        self.error = None;
    }
}
