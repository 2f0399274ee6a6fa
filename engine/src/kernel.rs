//! Metrics Kernel
//!
//! Stateless per-tick formulas for **spread** and **order-book imbalance**.
//!
//! Every output element depends only on the input elements at the same index,
//! so slices can be split and processed in any order (or in parallel) without
//! changing a single bit of the result. Degenerate inputs are not errors:
//!
//! - a crossed book yields a negative spread;
//! - zero total size yields an imbalance of `0.0`.

use corelib::EngineError;
use corelib::error::ensure_len;
use rayon::prelude::*;

/// `ask - bid`, unclamped.
#[inline]
pub fn spread(bid_price: f64, ask_price: f64) -> f64 {
    ask_price - bid_price
}

/// `(bid_size - ask_size) / (bid_size + ask_size)`, or `0.0` when the sum is not positive.
#[inline]
pub fn imbalance(bid_size: f64, ask_size: f64) -> f64 {
    let total = bid_size + ask_size;
    if total > 0.0 {
        (bid_size - ask_size) / total
    } else {
        0.0
    }
}

/// Elementwise spread over aligned slices.
pub fn measure_spread(bid_prices: &[f64], ask_prices: &[f64]) -> Result<Vec<f64>, EngineError> {
    ensure_len("ask_price", bid_prices.len(), ask_prices.len())?;

    Ok(bid_prices
        .par_iter()
        .zip(ask_prices.par_iter())
        .map(|(&b, &a)| spread(b, a))
        .collect())
}

/// Elementwise imbalance over aligned slices.
pub fn measure_imbalance(bid_sizes: &[f64], ask_sizes: &[f64]) -> Result<Vec<f64>, EngineError> {
    ensure_len("ask_size", bid_sizes.len(), ask_sizes.len())?;

    Ok(bid_sizes
        .par_iter()
        .zip(ask_sizes.par_iter())
        .map(|(&b, &a)| imbalance(b, a))
        .collect())
}

/// Write spreads for one chunk into `out`. Callers guarantee equal lengths.
pub(crate) fn fill_spread(bid_prices: &[f64], ask_prices: &[f64], out: &mut [f64]) {
    debug_assert_eq!(bid_prices.len(), out.len());
    debug_assert_eq!(ask_prices.len(), out.len());

    for ((o, &b), &a) in out.iter_mut().zip(bid_prices).zip(ask_prices) {
        *o = spread(b, a);
    }
}

/// Write imbalances for one chunk into `out`. Callers guarantee equal lengths.
pub(crate) fn fill_imbalance(bid_sizes: &[f64], ask_sizes: &[f64], out: &mut [f64]) {
    debug_assert_eq!(bid_sizes.len(), out.len());
    debug_assert_eq!(ask_sizes.len(), out.len());

    for ((o, &b), &a) in out.iter_mut().zip(bid_sizes).zip(ask_sizes) {
        *o = imbalance(b, a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_is_ask_minus_bid() {
        assert_eq!(spread(100.0, 100.25), 100.25 - 100.0);
    }

    #[test]
    fn crossed_book_gives_negative_spread() {
        assert!(spread(101.0, 100.0) < 0.0);
        assert_eq!(spread(101.0, 100.0), -1.0);
    }

    #[test]
    fn imbalance_basic() {
        assert!((imbalance(10.0, 5.0) - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(imbalance(0.0, 5.0), -1.0);
        assert_eq!(imbalance(5.0, 0.0), 1.0);
        assert_eq!(imbalance(7.0, 7.0), 0.0);
    }

    #[test]
    fn imbalance_zero_total_is_zero() {
        assert_eq!(imbalance(0.0, 0.0), 0.0);
    }

    #[test]
    fn imbalance_negative_total_falls_back_to_zero() {
        assert_eq!(imbalance(-3.0, 1.0), 0.0);
    }

    #[test]
    fn imbalance_negative_size_uses_literal_formula() {
        // total = 2 > 0, so no special-casing
        assert_eq!(imbalance(3.0, -1.0), 2.0);
    }

    #[test]
    fn measure_spread_elementwise() {
        let out = measure_spread(&[100.0, 100.5], &[100.2, 100.6]).unwrap();
        assert_eq!(out, vec![100.2 - 100.0, 100.6 - 100.5]);
    }

    #[test]
    fn measure_spread_rejects_mismatched_lengths() {
        let err = measure_spread(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            EngineError::ShapeMismatch {
                field: "ask_price",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn measure_imbalance_elementwise() {
        let out = measure_imbalance(&[10.0, 0.0], &[5.0, 0.0]).unwrap();
        assert!((out[0] - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn measure_imbalance_rejects_mismatched_lengths() {
        assert!(measure_imbalance(&[1.0], &[]).is_err());
    }

    #[test]
    fn fill_helpers_match_measure_functions() {
        let bids = [1.0, 2.0, 3.0];
        let asks = [1.5, 1.0, 3.0];

        let mut out = [0.0; 3];
        fill_spread(&bids, &asks, &mut out);
        assert_eq!(out.to_vec(), measure_spread(&bids, &asks).unwrap());

        fill_imbalance(&bids, &asks, &mut out);
        assert_eq!(out.to_vec(), measure_imbalance(&bids, &asks).unwrap());
    }
}
