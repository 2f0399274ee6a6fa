//! Order-book snapshots as aligned column arrays.
//!
//! A [`TickSeries`] holds one column per field (best bid/ask price and size,
//! traded volume, timestamp). All columns share the same length `N >= 1`;
//! the constructors refuse anything else, so downstream code can index every
//! column with the same `i` without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ensure_len};

/// Value used for the first time delta, where no previous timestamp exists.
pub const LEADING_TIME_DELTA: i64 = 1;

/// One snapshot as it arrives from the ingestion side (one JSON line per tick).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickRow {
    pub timestamp: i64,
    pub bid_price: f64,
    pub ask_price: f64,
    pub bid_size: f64,
    pub ask_size: f64,
    pub volume: f64,
}

/// Column-oriented tick data. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSeries {
    bid_price: Vec<f64>,
    ask_price: Vec<f64>,
    bid_size: Vec<f64>,
    ask_size: Vec<f64>,
    volume: Vec<f64>,
    timestamp: Vec<i64>,
}

impl TickSeries {
    /// Build from pre-split columns.
    ///
    /// Fails with `EmptySeries` when `timestamp` is empty and with
    /// `ShapeMismatch` naming the first column whose length differs from it.
    pub fn new(
        bid_price: Vec<f64>,
        ask_price: Vec<f64>,
        bid_size: Vec<f64>,
        ask_size: Vec<f64>,
        volume: Vec<f64>,
        timestamp: Vec<i64>,
    ) -> Result<Self, EngineError> {
        let n = timestamp.len();
        if n == 0 {
            return Err(EngineError::EmptySeries);
        }

        ensure_len("bid_price", n, bid_price.len())?;
        ensure_len("ask_price", n, ask_price.len())?;
        ensure_len("bid_size", n, bid_size.len())?;
        ensure_len("ask_size", n, ask_size.len())?;
        ensure_len("volume", n, volume.len())?;

        Ok(Self {
            bid_price,
            ask_price,
            bid_size,
            ask_size,
            volume,
            timestamp,
        })
    }

    /// Transpose row-shaped ticks into columns, keeping input order.
    pub fn from_rows(rows: &[TickRow]) -> Result<Self, EngineError> {
        if rows.is_empty() {
            return Err(EngineError::EmptySeries);
        }

        let n = rows.len();
        let mut bid_price = Vec::with_capacity(n);
        let mut ask_price = Vec::with_capacity(n);
        let mut bid_size = Vec::with_capacity(n);
        let mut ask_size = Vec::with_capacity(n);
        let mut volume = Vec::with_capacity(n);
        let mut timestamp = Vec::with_capacity(n);

        for r in rows {
            bid_price.push(r.bid_price);
            ask_price.push(r.ask_price);
            bid_size.push(r.bid_size);
            ask_size.push(r.ask_size);
            volume.push(r.volume);
            timestamp.push(r.timestamp);
        }

        Self::new(bid_price, ask_price, bid_size, ask_size, volume, timestamp)
    }

    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    pub fn bid_price(&self) -> &[f64] {
        &self.bid_price
    }

    pub fn ask_price(&self) -> &[f64] {
        &self.ask_price
    }

    pub fn bid_size(&self) -> &[f64] {
        &self.bid_size
    }

    pub fn ask_size(&self) -> &[f64] {
        &self.ask_size
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    pub fn timestamp(&self) -> &[i64] {
        &self.timestamp
    }

    pub fn time_deltas(&self) -> TimeDeltaSeries {
        TimeDeltaSeries::derive(&self.timestamp)
    }
}

/// Per-sample time deltas.
///
/// `deltas[0]` is [`LEADING_TIME_DELTA`]; `deltas[i] = timestamp[i] - timestamp[i-1]`
/// otherwise. Zero and negative deltas are kept as-is (repeated or unsorted
/// timestamps are valid input).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeDeltaSeries(Vec<i64>);

impl TimeDeltaSeries {
    pub fn from_timestamps(timestamps: &[i64]) -> Result<Self, EngineError> {
        if timestamps.is_empty() {
            return Err(EngineError::EmptySeries);
        }
        Ok(Self::derive(timestamps))
    }

    fn derive(timestamps: &[i64]) -> Self {
        let mut deltas = Vec::with_capacity(timestamps.len());
        if !timestamps.is_empty() {
            deltas.push(LEADING_TIME_DELTA);
        }
        deltas.extend(timestamps.windows(2).map(|w| w[1].saturating_sub(w[0])));
        Self(deltas)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
