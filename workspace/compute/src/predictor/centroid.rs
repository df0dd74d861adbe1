use async_trait::async_trait;
use common::{Measurement, Species};
use tracing::{debug, instrument};

use super::Predictor;
use crate::error::{ComputeError, Result};

/// Per-species mean of (sepal length, sepal width, petal length, petal width)
/// over Fisher's Iris data set.
const IRIS_CENTROIDS: [(Species, [f64; 4]); 3] = [
    (Species::Setosa, [5.006, 3.428, 1.462, 0.246]),
    (Species::Versicolor, [5.936, 2.770, 4.260, 1.326]),
    (Species::Virginica, [6.588, 2.974, 5.552, 2.026]),
];

/// Deterministic classifier assigning the species whose centroid is nearest.
#[derive(Debug, Clone)]
pub struct CentroidPredictor {
    centroids: Vec<(Species, [f64; 4])>,
}

impl CentroidPredictor {
    pub fn new() -> Self {
        Self::with_centroids(IRIS_CENTROIDS.to_vec())
    }

    pub fn with_centroids(centroids: Vec<(Species, [f64; 4])>) -> Self {
        Self { centroids }
    }

    fn squared_distance(a: &[f64; 4], b: &[f64; 4]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    }
}

impl Default for CentroidPredictor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Predictor for CentroidPredictor {
    fn name(&self) -> &'static str {
        "centroid"
    }

    #[instrument(skip(self))]
    async fn predict(&self, measurement: &Measurement) -> Result<Species> {
        let point = measurement.to_array();

        // Ties keep the earlier centroid
        let nearest = self
            .centroids
            .iter()
            .map(|(species, centroid)| (*species, Self::squared_distance(&point, centroid)))
            .fold(None::<(Species, f64)>, |best, candidate| match best {
                Some(best) if best.1 <= candidate.1 => Some(best),
                _ => Some(candidate),
            });

        match nearest {
            Some((species, distance)) => {
                debug!(%species, distance, "Nearest centroid");
                Ok(species)
            }
            None => Err(ComputeError::prediction("no centroids configured")),
        }
    }
}
