//! Batch Scheduler
//!
//! Splits `[0, N)` into contiguous chunks of at most `batch_size` ticks and
//! drives the kernel and the intensity tracker chunk by chunk.
//!
//! - spread / imbalance chunks are independent and run on the rayon pool;
//! - intensity chunks run in index order on one tracker, so each chunk starts
//!   from the carry left by the previous one (the first starts from `0.0`).
//!
//! The two passes run concurrently via `rayon::join`. Chunking only affects
//! memory locality: the output is identical for every `batch_size >= 1`.

use std::num::NonZeroUsize;
use std::ops::Range;

use corelib::EngineError;
use corelib::error::ensure_len;
use corelib::models::{MetricSeries, TickSeries, TimeDeltaSeries};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::intensity::IntensityTracker;
use crate::kernel;

pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Borrowed, index-aligned input columns for one scheduler run.
#[derive(Clone, Copy, Debug)]
pub struct MetricInputs<'a> {
    pub bid_price: &'a [f64],
    pub ask_price: &'a [f64],
    pub bid_size: &'a [f64],
    pub ask_size: &'a [f64],
    pub volume: &'a [f64],
    pub time_deltas: &'a [i64],
}

impl<'a> MetricInputs<'a> {
    pub fn from_series(ticks: &'a TickSeries, deltas: &'a TimeDeltaSeries) -> Self {
        Self {
            bid_price: ticks.bid_price(),
            ask_price: ticks.ask_price(),
            bid_size: ticks.bid_size(),
            ask_size: ticks.ask_size(),
            volume: ticks.volume(),
            time_deltas: deltas.as_slice(),
        }
    }

    /// Common length of all columns, or `ShapeMismatch` for the first one that differs.
    pub fn aligned_len(&self) -> Result<usize, EngineError> {
        let n = self.bid_price.len();
        ensure_len("ask_price", n, self.ask_price.len())?;
        ensure_len("bid_size", n, self.bid_size.len())?;
        ensure_len("ask_size", n, self.ask_size.len())?;
        ensure_len("volume", n, self.volume.len())?;
        ensure_len("time_deltas", n, self.time_deltas.len())?;
        Ok(n)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchScheduler {
    batch_size: NonZeroUsize,
}

impl Default for BatchScheduler {
    fn default() -> Self {
        Self {
            batch_size: NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl BatchScheduler {
    pub fn new(batch_size: usize) -> Result<Self, EngineError> {
        let batch_size =
            NonZeroUsize::new(batch_size).ok_or(EngineError::InvalidBatchSize(batch_size))?;
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Chunk boundaries for a series of length `n`.
    pub fn chunk_ranges(&self, n: usize) -> impl Iterator<Item = Range<usize>> {
        let b = self.batch_size.get();
        (0..n).step_by(b).map(move |start| start..(start + b).min(n))
    }

    /// Compute all three metric columns for `inputs`.
    ///
    /// Fails with `ShapeMismatch` when the input columns are not aligned.
    #[instrument(
        target = "engine::batch",
        skip(self, inputs),
        fields(batch_size = self.batch_size.get(), n = inputs.bid_price.len())
    )]
    pub fn run(&self, inputs: MetricInputs<'_>) -> Result<MetricSeries, EngineError> {
        let n = inputs.aligned_len()?;
        let b = self.batch_size.get();

        let mut spreads = vec![0.0; n];
        let mut imbalances = vec![0.0; n];
        let mut intensities = vec![0.0; n];

        rayon::join(
            || {
                spreads
                    .par_chunks_mut(b)
                    .zip(imbalances.par_chunks_mut(b))
                    .enumerate()
                    .for_each(|(chunk, (spread_out, imbalance_out))| {
                        let start = chunk * b;
                        let r = start..start + spread_out.len();

                        kernel::fill_spread(
                            &inputs.bid_price[r.clone()],
                            &inputs.ask_price[r.clone()],
                            spread_out,
                        );
                        kernel::fill_imbalance(
                            &inputs.bid_size[r.clone()],
                            &inputs.ask_size[r],
                            imbalance_out,
                        );
                    });
            },
            || {
                let mut tracker = IntensityTracker::new();
                for (r, out) in self.chunk_ranges(n).zip(intensities.chunks_mut(b)) {
                    tracker.fill(&inputs.volume[r.clone()], &inputs.time_deltas[r.clone()], out);
                    trace!(start = r.start, end = r.end, carry = tracker.carry(), "intensity chunk done");
                }
            },
        );

        debug!(chunks = n.div_ceil(b), "metric batches stitched");

        MetricSeries::new(spreads, imbalances, intensities)
    }
}
