use corelib::models::{Decision, MetricSample, Record};

/// Bundle the pieces of one output record. Performs no computation.
pub fn assemble_record(
    key: String,
    timestamp: i64,
    metrics: MetricSample,
    decision: Decision,
) -> Record {
    Record {
        key,
        timestamp,
        metrics,
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_carried_verbatim() {
        let m = MetricSample {
            spread: 0.1,
            imbalance: -0.4,
            intensity: 7.0,
        };
        let r = assemble_record("k1".into(), 1001, m, Decision::IntensityTooLow);

        assert_eq!(r.key, "k1");
        assert_eq!(r.timestamp, 1001);
        assert_eq!(r.metrics, m);
        assert_eq!(r.decision, Decision::IntensityTooLow);
    }
}
