//! Whole-series entry points.
//!
//! `calculate_metrics` derives the time deltas and runs the batch scheduler;
//! `build_records` turns the metric columns into keyed, classified records;
//! `analyse` does both and deduplicates the result.

use std::time::{Duration, Instant};

use corelib::Config;
use corelib::EngineError;
use corelib::error::ensure_len;
use corelib::models::{MetricSample, MetricSeries, Record, RecordBook, TickSeries, TimeDeltaSeries};
use rayon::prelude::*;
use tracing::{Span, debug, field, instrument, warn};

use crate::batch::{BatchScheduler, MetricInputs};
use crate::decision::classify;
use crate::key::key_for_sample;
use crate::record::assemble_record;

/// Metric columns plus the wall-clock cost of computing them.
#[derive(Clone, Debug)]
pub struct MetricsReport {
    pub series: MetricSeries,
    pub time_deltas: TimeDeltaSeries,
    /// Informational only; not part of the data contract.
    pub calculation_time: Duration,
}

impl MetricsReport {
    pub fn calculation_time_secs(&self) -> f64 {
        self.calculation_time.as_secs_f64()
    }
}

#[instrument(
    target = "engine::analyser",
    skip_all,
    fields(
        n = ticks.len(),
        batch_size = scheduler.batch_size(),
        calculation_time_ms = field::Empty
    )
)]
pub fn calculate_metrics(
    ticks: &TickSeries,
    scheduler: &BatchScheduler,
) -> Result<MetricsReport, EngineError> {
    let start = Instant::now();

    let time_deltas = ticks.time_deltas();
    let series = scheduler.run(MetricInputs::from_series(ticks, &time_deltas))?;

    let calculation_time = start.elapsed();
    Span::current().record(
        "calculation_time_ms",
        calculation_time.as_secs_f64() * 1_000.0,
    );

    debug!(samples = series.len(), "metrics calculated");

    Ok(MetricsReport {
        series,
        time_deltas,
        calculation_time,
    })
}

/// One record per tick, in tick order.
///
/// Fails with `ShapeMismatch` when `series` was not computed from `ticks`.
#[instrument(target = "engine::analyser", skip(ticks, series, cfg), fields(n = ticks.len()))]
pub fn build_records(
    ticker: &str,
    ticks: &TickSeries,
    series: &MetricSeries,
    cfg: &Config,
) -> Result<Vec<Record>, EngineError> {
    ensure_len("metrics", ticks.len(), series.len())?;

    let spreads = series.spreads();
    let imbalances = series.imbalances();
    let intensities = series.intensities();

    let records: Vec<Record> = ticks
        .timestamp()
        .par_iter()
        .enumerate()
        .map(|(i, &ts)| {
            let metrics = MetricSample {
                spread: spreads[i],
                imbalance: imbalances[i],
                intensity: intensities[i],
            };
            let key = key_for_sample(ticker, ts, &metrics);
            let decision = classify(&metrics, cfg);
            assemble_record(key, ts, metrics, decision)
        })
        .collect();

    debug!(records = records.len(), "records assembled");

    Ok(records)
}

/// Result of a full analysis run.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub report: MetricsReport,
    pub book: RecordBook,
}

pub fn analyse(
    ticker: &str,
    ticks: &TickSeries,
    cfg: &Config,
    scheduler: &BatchScheduler,
) -> Result<Analysis, EngineError> {
    let report = calculate_metrics(ticks, scheduler)?;
    let records = build_records(ticker, ticks, &report.series, cfg)?;
    let book = RecordBook::from_records(records);

    if book.duplicates() > 0 {
        warn!(
            ticker,
            duplicates = book.duplicates(),
            kept = book.len(),
            "duplicate samples dropped"
        );
    }

    Ok(Analysis { report, book })
}
