use async_trait::async_trait;
use common::{Measurement, Species};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

pub mod centroid;
pub mod latency;

pub use centroid::CentroidPredictor;
pub use latency::{DEFAULT_LATENCY, DelayedPredictor, Timer};

/// Maps a measurement to a species label.
///
/// Futures are not required to be `Send`: predictors run on the single UI
/// thread of the browser.
#[async_trait(?Send)]
pub trait Predictor {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn predict(&self, measurement: &Measurement) -> Result<Species>;
}

#[async_trait(?Send)]
impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn predict(&self, measurement: &Measurement) -> Result<Species> {
        (**self).predict(measurement).await
    }
}

/// Stand-in predictor that ignores its input and picks a label uniformly at random.
pub struct RandomPredictor<R: Rng = StdRng> {
    rng: RefCell<R>,
}

impl RandomPredictor<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence of labels, for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPredictor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPredictor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

#[async_trait(?Send)]
impl<R: Rng> Predictor for RandomPredictor<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    #[instrument(skip(self))]
    async fn predict(&self, measurement: &Measurement) -> Result<Species> {
        let index = self.rng.borrow_mut().gen_range(0..Species::ALL.len());
        let species = Species::ALL[index];
        debug!(%species, "Picked random label");
        Ok(species)
    }
}

/// Which predictor implementation the application should run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictorKind {
    /// Random label after a simulated delay
    #[default]
    Mock,
    /// Nearest class centroid
    Centroid,
}

impl PredictorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictorKind::Mock => "mock",
            PredictorKind::Centroid => "centroid",
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictorKind {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mock" | "random" => Ok(PredictorKind::Mock),
            "centroid" => Ok(PredictorKind::Centroid),
            other => Err(ComputeError::Configuration(format!(
                "unknown predictor kind '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_random_predictor_only_yields_known_labels() {
        let predictor = RandomPredictor::with_seed(7);
        let measurement = Measurement::default();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let species = predictor.predict(&measurement).await.unwrap();
            assert!(Species::ALL.contains(&species));
            seen.insert(species);
        }

        // 200 uniform draws over three labels hit every label
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn test_random_predictor_is_reproducible_with_seed() {
        let first = RandomPredictor::with_seed(42);
        let second = RandomPredictor::with_seed(42);
        let measurement = Measurement::new(5.1, 3.5, 1.4, 0.2);

        for _ in 0..20 {
            assert_eq!(
                first.predict(&measurement).await.unwrap(),
                second.predict(&measurement).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_boxed_predictor_delegates() {
        let predictor: Box<dyn Predictor> = Box::new(CentroidPredictor::new());
        assert_eq!(predictor.name(), "centroid");

        let species = predictor
            .predict(&Measurement::new(5.1, 3.5, 1.4, 0.2))
            .await
            .unwrap();
        assert_eq!(species, Species::Setosa);
    }

    #[test]
    fn test_predictor_kind_parsing() {
        assert_eq!("mock".parse::<PredictorKind>(), Ok(PredictorKind::Mock));
        assert_eq!("Random".parse::<PredictorKind>(), Ok(PredictorKind::Mock));
        assert_eq!(
            " CENTROID ".parse::<PredictorKind>(),
            Ok(PredictorKind::Centroid)
        );
        assert!(matches!(
            "svm".parse::<PredictorKind>(),
            Err(ComputeError::Configuration(_))
        ));
        assert_eq!(PredictorKind::default(), PredictorKind::Mock);
    }
}
