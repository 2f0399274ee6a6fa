mod cli;
mod input;
mod report;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use common::logger::{TraceId, child_span, init_logger, root_span, warn_if_slow};
use corelib::Config;
use engine::analyser::analyse;
use engine::batch::BatchScheduler;
use engine::summary::DecisionSummary;
use tracing::info;

use cli::Cli;

/// Analysis runs slower than this are flagged in the logs.
const SLOW_ANALYSIS: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logger("microanalyse", cli.json_logs);

    let trace_id = TraceId::new();
    let span = root_span("microanalyse", &trace_id);
    let _root = span.enter();
    span.record("ticker", cli.ticker.as_str());

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = Config::load_or_default(&cli.config);
    info!(
        data_source = %cfg.data_source,
        max_trade_size = cfg.max_trade_size,
        spread_max = cfg.decision_thresholds.spread_max,
        imbalance_min = cfg.decision_thresholds.imbalance_min,
        intensity_min = cfg.decision_thresholds.intensity_min,
        "configuration in effect"
    );

    let scheduler = BatchScheduler::new(cli.batch_size).context("invalid --batch-size")?;
    let ticks = input::load_ticks(&cli.input)?;

    let analysis = {
        let _g = child_span("analyse").entered();
        warn_if_slow("analyse", SLOW_ANALYSIS, || {
            analyse(&cli.ticker, &ticks, &cfg, &scheduler)
        })
        .context("metric calculation failed")?
    };

    info!(
        samples = ticks.len(),
        records = analysis.book.len(),
        calculation_time_secs = analysis.report.calculation_time_secs(),
        "analysis complete"
    );

    report::write_records(&cli.outdir, &cli.ticker, &analysis.book)?;

    if cli.summary {
        let summary = DecisionSummary::from_records(
            &cli.ticker,
            analysis.book.records(),
            analysis.report.calculation_time,
        );
        info!(
            total = summary.total,
            favorable_ratio = summary.favorable_ratio,
            overall = ?summary.overall,
            "decision summary"
        );
        report::write_summary(&cli.outdir, &cli.ticker, &summary)?;
    }

    Ok(())
}
