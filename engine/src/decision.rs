//! Maps a metric sample to a tradeability label.
//
//  Pure: no IO, no state.

use corelib::Config;
use corelib::models::{Decision, MetricSample};

/// Classify one sample against the configured thresholds.
///
/// A sample is `Favorable` only when all of these hold:
///   - `spread <= spread_max`
///   - `|imbalance| >= imbalance_min`
///   - `intensity >= intensity_min`
///
/// Otherwise the first failed check (in that order) names the label.
/// A NaN metric fails its check.
pub fn classify(sample: &MetricSample, cfg: &Config) -> Decision {
    let t = &cfg.decision_thresholds;

    if sample.spread.is_nan() || sample.spread > t.spread_max {
        return Decision::SpreadTooWide;
    }

    if sample.imbalance.is_nan() || sample.imbalance.abs() < t.imbalance_min {
        return Decision::ImbalanceTooWeak;
    }

    if sample.intensity.is_nan() || sample.intensity < t.intensity_min {
        return Decision::IntensityTooLow;
    }

    Decision::Favorable
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::DecisionThresholds;

    fn cfg(spread_max: f64, imbalance_min: f64, intensity_min: f64) -> Config {
        Config {
            decision_thresholds: DecisionThresholds {
                spread_max,
                imbalance_min,
                intensity_min,
            },
            ..Default::default()
        }
    }

    fn sample(spread: f64, imbalance: f64, intensity: f64) -> MetricSample {
        MetricSample {
            spread,
            imbalance,
            intensity,
        }
    }

    #[test]
    fn all_conditions_pass() {
        let out = classify(&sample(0.01, 0.5, 20.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::Favorable);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let out = classify(&sample(0.05, 0.2, 5.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::Favorable);
    }

    #[test]
    fn negative_imbalance_counts_by_magnitude() {
        let out = classify(&sample(0.01, -0.6, 20.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::Favorable);
    }

    #[test]
    fn crossed_book_passes_spread_check() {
        let out = classify(&sample(-0.02, 0.5, 20.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::Favorable);
    }

    #[test]
    fn spread_too_wide_fails() {
        let out = classify(&sample(0.2, 0.5, 20.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::SpreadTooWide);
    }

    #[test]
    fn imbalance_too_weak_fails() {
        let out = classify(&sample(0.01, 0.1, 20.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::ImbalanceTooWeak);
    }

    #[test]
    fn intensity_too_low_fails() {
        let out = classify(&sample(0.01, 0.5, 1.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::IntensityTooLow);
    }

    #[test]
    fn first_failed_check_wins() {
        let out = classify(&sample(1.0, 0.0, 0.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::SpreadTooWide);

        let out = classify(&sample(0.0, 0.0, 0.0), &cfg(0.05, 0.2, 5.0));
        assert_eq!(out, Decision::ImbalanceTooWeak);
    }

    #[test]
    fn nan_metric_is_never_favorable() {
        let c = cfg(0.05, 0.2, 5.0);
        assert_eq!(classify(&sample(f64::NAN, 0.5, 20.0), &c), Decision::SpreadTooWide);
        assert_eq!(classify(&sample(0.01, f64::NAN, 20.0), &c), Decision::ImbalanceTooWeak);
        assert_eq!(classify(&sample(0.01, 0.5, f64::NAN), &c), Decision::IntensityTooLow);
    }

    #[test]
    fn default_config_uses_documented_thresholds() {
        let c = Config::default();
        assert_eq!(classify(&sample(0.05, 0.2, 5.0), &c), Decision::Favorable);
        assert_eq!(classify(&sample(0.051, 0.2, 5.0), &c), Decision::SpreadTooWide);
    }
}
