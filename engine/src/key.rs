//! Content-derived record keys.
//!
//! A key is the SHA-256 hex digest of
//! `"{ticker}|{timestamp}|{spread}|{imbalance}|{intensity}"`, with floats in
//! their shortest round-trip form (`50.0`, `0.3333333333333333`). Nothing
//! else feeds the hash, so the same sample always maps to the same key.

use corelib::models::MetricSample;
use sha2::{Digest, Sha256};

/// Length of a generated key (hex-encoded SHA-256).
pub const KEY_LEN: usize = 64;

/// Canonical hash input for one sample.
pub fn canonical_input(
    ticker: &str,
    timestamp: i64,
    spread: f64,
    imbalance: f64,
    intensity: f64,
) -> String {
    format!("{ticker}|{timestamp}|{spread:?}|{imbalance:?}|{intensity:?}")
}

pub fn generate_key(
    ticker: &str,
    timestamp: i64,
    spread: f64,
    imbalance: f64,
    intensity: f64,
) -> String {
    sha256_hex(&canonical_input(
        ticker, timestamp, spread, imbalance, intensity,
    ))
}

/// Key for a computed sample.
pub fn key_for_sample(ticker: &str, timestamp: i64, sample: &MetricSample) -> String {
    generate_key(
        ticker,
        timestamp,
        sample.spread,
        sample.imbalance,
        sample.intensity,
    )
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
