use common::MeasurementError;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A measurement value could not be read from user input
    #[error("Measurement error: {0}")]
    Measurement(#[from] MeasurementError),

    /// The predictor failed to produce a label
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// A prediction result arrived while no prediction was in flight
    #[error("No prediction is pending")]
    NotPending,

    /// Misconfigured predictor selection
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ComputeError {
    /// Builds a prediction error and records it.
    pub fn prediction(message: impl Into<String>) -> Self {
        let err = ComputeError::Prediction(message.into());
        error!(?err, "Prediction failed");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
