use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ensure_len};

/// Derived microstructure metrics for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// `ask - bid`. Negative means a crossed book.
    pub spread: f64,
    /// `(bid_size - ask_size) / (bid_size + ask_size)`, 0 when the sizes sum to 0.
    pub imbalance: f64,
    /// Volume per unit time, forward-filled across non-positive time deltas.
    pub intensity: f64,
}

/// Full-length metric columns, index-aligned with the source `TickSeries`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MetricSeries {
    spreads: Vec<f64>,
    imbalances: Vec<f64>,
    intensities: Vec<f64>,
}

impl MetricSeries {
    pub fn new(
        spreads: Vec<f64>,
        imbalances: Vec<f64>,
        intensities: Vec<f64>,
    ) -> Result<Self, EngineError> {
        ensure_len("imbalances", spreads.len(), imbalances.len())?;
        ensure_len("intensities", spreads.len(), intensities.len())?;

        Ok(Self {
            spreads,
            imbalances,
            intensities,
        })
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    pub fn spreads(&self) -> &[f64] {
        &self.spreads
    }

    pub fn imbalances(&self) -> &[f64] {
        &self.imbalances
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn get(&self, i: usize) -> Option<MetricSample> {
        Some(MetricSample {
            spread: *self.spreads.get(i)?,
            imbalance: *self.imbalances.get(i)?,
            intensity: *self.intensities.get(i)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = MetricSample> + '_ {
        self.spreads
            .iter()
            .zip(&self.imbalances)
            .zip(&self.intensities)
            .map(|((&spread, &imbalance), &intensity)| MetricSample {
                spread,
                imbalance,
                intensity,
            })
    }
}
