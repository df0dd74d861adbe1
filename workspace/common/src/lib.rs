//! Data model shared between the prediction logic and the frontend.
//! Measurements, their selectable ranges, species labels and history
//! records all live here so every layer agrees on one shape.

mod history;
mod measurement;
mod species;

pub use history::HistoryEntry;
pub use measurement::{FieldRange, Measurement, MeasurementError, MeasurementField, format_value};
pub use species::{Species, UnknownSpecies};
