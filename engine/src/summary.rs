//! Run-level summary of per-sample decisions.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use corelib::models::{Decision, MetricSample, Record};
use serde::Serialize;

/// Share of favorable samples at which the run as a whole counts as favorable.
pub const FAVORABLE_QUORUM: f64 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecisionSummary {
    pub ticker: String,
    pub total: usize,
    /// Sample count per label; every label is present, possibly with 0.
    pub counts: BTreeMap<Decision, usize>,
    pub favorable_ratio: f64,
    /// `favorable` when at least [`FAVORABLE_QUORUM`] of samples are favorable,
    /// otherwise the most frequent failure label. `None` for an empty run.
    pub overall: Option<Decision>,
    pub mean: Option<MetricSample>,
    pub window_start: Option<i64>,
    pub window_end: Option<i64>,
    /// `window_start` / `window_end` read as unix seconds.
    pub window_start_utc: Option<String>,
    pub window_end_utc: Option<String>,
    pub calculation_time_secs: f64,
}

impl DecisionSummary {
    pub fn from_records(ticker: &str, records: &[Record], calculation_time: Duration) -> Self {
        let mut counts: BTreeMap<Decision, usize> = Decision::ALL.iter().map(|d| (*d, 0)).collect();
        for r in records {
            *counts.entry(r.decision).or_default() += 1;
        }

        let total = records.len();
        let favorable = counts.get(&Decision::Favorable).copied().unwrap_or(0);
        let favorable_ratio = if total > 0 {
            favorable as f64 / total as f64
        } else {
            0.0
        };

        let window_start = records.iter().map(|r| r.timestamp).min();
        let window_end = records.iter().map(|r| r.timestamp).max();

        Self {
            ticker: ticker.to_string(),
            total,
            overall: overall_decision(&counts, total, favorable_ratio),
            counts,
            favorable_ratio,
            mean: mean_sample(records),
            window_start,
            window_end,
            window_start_utc: window_start.and_then(to_utc_string),
            window_end_utc: window_end.and_then(to_utc_string),
            calculation_time_secs: calculation_time.as_secs_f64(),
        }
    }
}

fn overall_decision(
    counts: &BTreeMap<Decision, usize>,
    total: usize,
    favorable_ratio: f64,
) -> Option<Decision> {
    if total == 0 {
        return None;
    }
    if favorable_ratio >= FAVORABLE_QUORUM {
        return Some(Decision::Favorable);
    }

    // ties go to the label checked first
    let mut worst: Option<(Decision, usize)> = None;
    for (&d, &c) in counts.iter().filter(|(d, _)| !d.is_favorable()) {
        if worst.is_none_or(|(_, best)| c > best) {
            worst = Some((d, c));
        }
    }
    worst.map(|(d, _)| d)
}

fn mean_sample(records: &[Record]) -> Option<MetricSample> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    let (s, i, x) = records.iter().fold((0.0, 0.0, 0.0), |(s, i, x), r| {
        (
            s + r.metrics.spread,
            i + r.metrics.imbalance,
            x + r.metrics.intensity,
        )
    });
    Some(MetricSample {
        spread: s / n,
        imbalance: i / n,
        intensity: x / n,
    })
}

fn to_utc_string(ts: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(ts, 0).map(|d| d.to_rfc3339())
}
