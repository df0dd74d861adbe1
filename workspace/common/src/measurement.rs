use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while reading a measurement value from user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// The input could not be parsed into a finite number
    #[error("Invalid value {input:?} for {field}")]
    InvalidValue { field: MeasurementField, input: String },
}

/// One of the four numeric inputs describing an iris sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementField {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl MeasurementField {
    /// All fields in form order.
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::SepalLength,
        MeasurementField::SepalWidth,
        MeasurementField::PetalLength,
        MeasurementField::PetalWidth,
    ];

    /// camelCase key, used as the form control name and the serialized field name.
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "sepalLength",
            MeasurementField::SepalWidth => "sepalWidth",
            MeasurementField::PetalLength => "petalLength",
            MeasurementField::PetalWidth => "petalWidth",
        }
    }

    /// Form label: the key with its first letter upper-cased.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "SepalLength",
            MeasurementField::SepalWidth => "SepalWidth",
            MeasurementField::PetalLength => "PetalLength",
            MeasurementField::PetalWidth => "PetalWidth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Selectable range for this field.
    ///
    /// Bounds are derived from the key name alone: anything containing
    /// "Width" starts at 0.1 (otherwise 1.0) and anything containing
    /// "Length" ends at 7.0 (otherwise 4.0).
    pub fn range(&self) -> FieldRange {
        let key = self.key();
        let start = if key.contains("Width") {
            Decimal::new(1, 1)
        } else {
            Decimal::new(1, 0)
        };
        let end = if key.contains("Length") {
            Decimal::new(7, 0)
        } else {
            Decimal::new(4, 0)
        };
        FieldRange {
            start,
            end,
            step: FieldRange::STEP,
        }
    }

    /// Parses a raw option value for this field.
    pub fn parse_value(&self, input: &str) -> Result<f64, MeasurementError> {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(MeasurementError::InvalidValue {
                field: *self,
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive range of selectable values with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub start: Decimal,
    pub end: Decimal,
    pub step: Decimal,
}

impl FieldRange {
    pub const STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

    pub fn start(&self) -> f64 {
        decimal_to_f64(self.start)
    }

    pub fn end(&self) -> f64 {
        decimal_to_f64(self.end)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start() && value <= self.end()
    }

    /// Enumerates every selectable value from `start` to `end` inclusive.
    ///
    /// Stepping happens in decimal space so 0.1 increments never drift.
    pub fn options(&self) -> Vec<f64> {
        let mut options = Vec::new();
        if self.step <= Decimal::ZERO {
            return options;
        }

        let mut current = self.start;
        while current <= self.end {
            options.push(decimal_to_f64(current));
            current = (current + self.step).round_dp(1);
        }
        options
    }
}

/// Nearest `f64` to a short decimal, so `0.3` maps to the same bits as the literal.
fn decimal_to_f64(value: Decimal) -> f64 {
    value.mantissa() as f64 / 10f64.powi(value.scale() as i32)
}

/// Canonical text for a measurement value: one decimal place, trailing zeros dropped.
pub fn format_value(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal.round_dp(1).normalize().to_string(),
        None => {
            tracing::warn!(value, "Value cannot be represented as a decimal");
            value.to_string()
        }
    }
}

/// The four measurements of one iris sample, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            sepal_length: 4.0,
            sepal_width: 2.0,
            petal_length: 1.0,
            petal_width: 0.1,
        }
    }
}

impl Measurement {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    pub fn get(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::SepalLength => self.sepal_length,
            MeasurementField::SepalWidth => self.sepal_width,
            MeasurementField::PetalLength => self.petal_length,
            MeasurementField::PetalWidth => self.petal_width,
        }
    }

    /// Replaces exactly one field.
    pub fn set(&mut self, field: MeasurementField, value: f64) {
        let slot = match field {
            MeasurementField::SepalLength => &mut self.sepal_length,
            MeasurementField::SepalWidth => &mut self.sepal_width,
            MeasurementField::PetalLength => &mut self.petal_length,
            MeasurementField::PetalWidth => &mut self.petal_width,
        };
        *slot = value;
    }

    /// Values in `MeasurementField::ALL` order.
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_follow_key_names() {
        let sepal_length = MeasurementField::SepalLength.range();
        assert_eq!(sepal_length.start, Decimal::new(1, 0));
        assert_eq!(sepal_length.end, Decimal::new(7, 0));

        let sepal_width = MeasurementField::SepalWidth.range();
        assert_eq!(sepal_width.start, Decimal::new(1, 1));
        assert_eq!(sepal_width.end, Decimal::new(4, 0));

        assert_eq!(MeasurementField::PetalLength.range(), sepal_length);
        assert_eq!(MeasurementField::PetalWidth.range(), sepal_width);
    }

    #[test]
    fn test_length_options_cover_one_to_seven() {
        let options = MeasurementField::SepalLength.range().options();
        assert_eq!(options.len(), 61);
        assert_eq!(options.first(), Some(&1.0));
        assert_eq!(options.last(), Some(&7.0));
        assert!(options.contains(&5.1));
    }

    #[test]
    fn test_width_options_do_not_drift() {
        let options = MeasurementField::PetalWidth.range().options();
        assert_eq!(options.len(), 40);
        assert_eq!(options[0], 0.1);
        assert_eq!(options[2], 0.3);
        assert_eq!(options[39], 4.0);
        for value in &options {
            assert_eq!(format_value(*value).parse::<f64>().unwrap(), *value);
        }
    }

    #[test]
    fn test_options_with_zero_step_are_empty() {
        let range = FieldRange {
            step: Decimal::ZERO,
            ..MeasurementField::SepalWidth.range()
        };
        assert!(range.options().is_empty());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(5.1), "5.1");
        assert_eq!(format_value(0.30000000000000004), "0.3");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(MeasurementField::SepalWidth.parse_value("3.5"), Ok(3.5));
        assert_eq!(MeasurementField::SepalWidth.parse_value(" 4 "), Ok(4.0));

        let err = MeasurementField::PetalLength.parse_value("abc").unwrap_err();
        assert_eq!(
            err,
            MeasurementError::InvalidValue {
                field: MeasurementField::PetalLength,
                input: "abc".to_string(),
            }
        );
        assert!(MeasurementField::PetalLength.parse_value("NaN").is_err());
        assert!(MeasurementField::PetalLength.parse_value("inf").is_err());
    }

    #[test]
    fn test_set_replaces_only_one_field() {
        let mut measurement = Measurement::default();
        let before = measurement;

        measurement.set(MeasurementField::PetalLength, 4.5);

        assert_eq!(measurement.petal_length, 4.5);
        assert_eq!(measurement.sepal_length, before.sepal_length);
        assert_eq!(measurement.sepal_width, before.sepal_width);
        assert_eq!(measurement.petal_width, before.petal_width);
    }

    #[test]
    fn test_keys_and_labels() {
        for field in MeasurementField::ALL {
            assert_eq!(MeasurementField::from_key(field.key()), Some(field));
            assert_eq!(field.label().to_lowercase(), field.key().to_lowercase());
        }
        assert_eq!(MeasurementField::from_key("stemLength"), None);
    }

    #[test]
    fn test_range_contains() {
        let range = MeasurementField::SepalWidth.range();
        assert!(range.contains(0.1));
        assert!(range.contains(4.0));
        assert!(!range.contains(0.0));
        assert!(!range.contains(4.1));
    }
}
