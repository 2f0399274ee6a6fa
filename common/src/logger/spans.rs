use std::time::{Duration, Instant};

use tracing::{Span, field};

use super::TraceId;

/// Create a root span for a run / batch / job.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "root",
        name = %name,
        trace_id = %trace_id,
        ticker = field::Empty
    )
}

/// Create a child span (inherits trace_id from the enclosing root span).
pub fn child_span(name: &'static str) -> Span {
    tracing::info_span!("child", name = %name)
}

/// Run `f` and warn under the `performance` target when it takes longer than `max`.
pub fn warn_if_slow<F, T>(label: &'static str, max: Duration, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    if elapsed > max {
        tracing::warn!(
            target: "performance",
            label = label,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow operation detected"
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_if_slow_returns_closure_output() {
        let out = warn_if_slow("sum", Duration::from_secs(60), || (1..=10).sum::<u32>());
        assert_eq!(out, 55);
    }

    #[test]
    fn spans_can_be_entered_without_subscriber() {
        let id = TraceId::new();
        let root = root_span("analyse", &id);
        let _g = root.enter();
        root.record("ticker", "SPY");

        let child = child_span("batch");
        let _c = child.enter();
    }
}
