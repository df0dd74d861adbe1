//! Projection of the prediction history onto line series.
//!
//! Points are placed at their insertion index, so the horizontal axis is
//! the order predictions completed in. Sepal length only names each slot
//! through the tick labels; repeated or decreasing values never reorder or
//! merge points.

use common::{HistoryEntry, MeasurementField, format_value};

/// Field whose values label the horizontal axis.
pub const X_AXIS_FIELD: MeasurementField = MeasurementField::SepalLength;

/// Fields drawn as one line each, in legend order.
pub const PLOTTED_FIELDS: [MeasurementField; 3] = [
    MeasurementField::SepalWidth,
    MeasurementField::PetalLength,
    MeasurementField::PetalWidth,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub field: MeasurementField,
    /// Insertion index of each point
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Tick positions and their text for the horizontal axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

fn positions(history: &[HistoryEntry]) -> Vec<f64> {
    (0..history.len()).map(|i| i as f64).collect()
}

pub fn history_series(history: &[HistoryEntry]) -> Vec<ChartSeries> {
    let x = positions(history);

    PLOTTED_FIELDS
        .iter()
        .map(|field| ChartSeries {
            field: *field,
            x: x.clone(),
            y: history
                .iter()
                .map(|entry| entry.measurement.get(*field))
                .collect(),
        })
        .collect()
}

/// One tick per history entry, labelled with its sepal length.
pub fn x_axis_ticks(history: &[HistoryEntry]) -> AxisTicks {
    AxisTicks {
        values: positions(history),
        labels: history
            .iter()
            .map(|entry| format_value(entry.measurement.get(X_AXIS_FIELD)))
            .collect(),
    }
}
