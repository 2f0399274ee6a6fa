//! Intensity Tracker
//!
//! Trading intensity is volume per unit time:
//!
//! ```text
//! intensity[i] = volume[i] / time_delta[i]     if time_delta[i] > 0
//!              = intensity[i-1]                otherwise (forward-fill)
//!              = carry                         for the first element
//! ```
//!
//! The forward-fill makes the computation strictly sequential. The tracker
//! exposes its last value as an explicit `carry`, so a long series can be
//! processed as disjoint chunks by seeding each chunk with the previous
//! chunk's carry. A fresh tracker starts at `0.0`.

use corelib::EngineError;
use corelib::error::ensure_len;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntensityTracker {
    carry: f64,
}

impl IntensityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a value produced by an earlier chunk.
    pub fn with_carry(carry: f64) -> Self {
        Self { carry }
    }

    /// Last computed intensity (or the seed if nothing was computed yet).
    pub fn carry(&self) -> f64 {
        self.carry
    }

    /// Advance by one sample and return its intensity.
    #[inline]
    pub fn step(&mut self, volume: f64, time_delta: i64) -> f64 {
        if time_delta > 0 {
            self.carry = volume / time_delta as f64;
        }
        self.carry
    }

    /// Process one chunk in order, writing into `out`. Callers guarantee equal lengths.
    pub fn fill(&mut self, volumes: &[f64], time_deltas: &[i64], out: &mut [f64]) {
        debug_assert_eq!(volumes.len(), out.len());
        debug_assert_eq!(time_deltas.len(), out.len());

        for ((o, &v), &dt) in out.iter_mut().zip(volumes).zip(time_deltas) {
            *o = self.step(v, dt);
        }
    }
}

/// Single-pass intensity over a whole series, starting from a zero carry.
pub fn measure_intensity(volumes: &[f64], time_deltas: &[i64]) -> Result<Vec<f64>, EngineError> {
    ensure_len("time_deltas", volumes.len(), time_deltas.len())?;

    let mut out = vec![0.0; volumes.len()];
    IntensityTracker::new().fill(volumes, time_deltas, &mut out);
    Ok(out)
}
