use crate::measurement::Measurement;
use crate::species::Species;
use serde::{Deserialize, Serialize};

/// A completed prediction: the inputs it was made for and the label it produced.
///
/// Serializes as one flat record, e.g.
/// `{"sepalLength":5.1,"sepalWidth":3.5,"petalLength":1.4,"petalWidth":0.2,"result":"Setosa"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub measurement: Measurement,
    pub result: Species,
}

impl HistoryEntry {
    pub fn new(measurement: Measurement, result: Species) -> Self {
        Self {
            measurement,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_entry_serializes_flat() {
        let entry = HistoryEntry::new(Measurement::new(5.1, 3.5, 1.4, 0.2), Species::Setosa);

        let value = serde_json::to_value(entry).unwrap();

        assert_eq!(
            value,
            json!({
                "sepalLength": 5.1,
                "sepalWidth": 3.5,
                "petalLength": 1.4,
                "petalWidth": 0.2,
                "result": "Setosa"
            })
        );
    }

    #[test]
    fn test_history_entry_deserializes_flat() {
        let raw = r#"{"sepalLength":6.3,"sepalWidth":2.9,"petalLength":5.6,"petalWidth":1.8,"result":"Virginica"}"#;

        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.measurement, Measurement::new(6.3, 2.9, 5.6, 1.8));
        assert_eq!(entry.result, Species::Virginica);
    }
}
