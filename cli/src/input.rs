use std::fs;
use std::path::Path;

use anyhow::Context;
use corelib::models::{TickRow, TickSeries};
use tracing::info;

/// Read a tick file into columns.
pub fn load_ticks(path: &Path) -> anyhow::Result<TickSeries> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read tick file {}", path.display()))?;

    let rows = parse_ticks(&raw).with_context(|| format!("invalid tick file {}", path.display()))?;
    let series = TickSeries::from_rows(&rows)
        .with_context(|| format!("no usable ticks in {}", path.display()))?;

    info!(path = %path.display(), ticks = series.len(), "ticks loaded");
    Ok(series)
}

/// Accepts either a JSON array of tick objects or JSON Lines. Blank lines are skipped.
pub fn parse_ticks(raw: &str) -> anyhow::Result<Vec<TickRow>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("malformed JSON array of ticks");
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<TickRow>(line)
                .with_context(|| format!("malformed tick on line {}", i + 1))
        })
        .collect()
}
