use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use corelib::models::RecordBook;
use engine::summary::DecisionSummary;
use serde::Serialize;
use tracing::info;

/// Write the keyed record map to `<outdir>/<ticker>_records.json`.
pub fn write_records(outdir: &Path, ticker: &str, book: &RecordBook) -> anyhow::Result<PathBuf> {
    let path = outdir.join(format!("{}_records.json", file_stem(ticker)));
    write_json(&path, book)?;
    info!(path = %path.display(), records = book.len(), "records written");
    Ok(path)
}

/// Write the run summary to `<outdir>/<ticker>_summary.json`.
pub fn write_summary(
    outdir: &Path,
    ticker: &str,
    summary: &DecisionSummary,
) -> anyhow::Result<PathBuf> {
    let path = outdir.join(format!("{}_summary.json", file_stem(ticker)));
    write_json(&path, summary)?;
    info!(path = %path.display(), "summary written");
    Ok(path)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Ticker reduced to characters that are safe in a file name.
fn file_stem(ticker: &str) -> String {
    ticker
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
