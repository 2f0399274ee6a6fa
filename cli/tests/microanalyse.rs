use std::fs;
use std::path::PathBuf;
use std::process::Command;

const TICKS: &str = r#"{"timestamp":1000,"bid_price":100.0,"ask_price":100.2,"bid_size":10,"ask_size":5,"volume":50}
{"timestamp":1001,"bid_price":100.5,"ask_price":100.6,"bid_size":0,"ask_size":0,"volume":0}
{"timestamp":1002,"bid_price":100.5,"ask_price":100.52,"bid_size":40,"ask_size":10,"volume":90}
"#;

/// Scratch directory unique to one test.
fn workdir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("microanalyse-it-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn microanalyse() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_microanalyse"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn writes_records_and_summary() {
    let dir = workdir();
    let input = dir.join("market.jsonl");
    fs::write(&input, TICKS).unwrap();
    let outdir = dir.join("reports");

    let status = microanalyse()
        .arg("--input")
        .arg(&input)
        .arg("--outdir")
        .arg(&outdir)
        .args(["--ticker", "SPY", "--batch-size", "2", "--summary"])
        .arg("--config")
        .arg(dir.join("missing.toml"))
        .status()
        .unwrap();
    assert!(status.success());

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outdir.join("SPY_records.json")).unwrap()).unwrap();
    let records = records.as_object().unwrap();
    assert_eq!(records.len(), 3);
    for (key, body) in records {
        assert_eq!(key.len(), 64);
        assert!(body["metrics"]["spread"].is_number());
        assert!(body["decision"].is_string());
    }

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(outdir.join("SPY_summary.json")).unwrap()).unwrap();
    assert_eq!(summary["ticker"], "SPY");
    assert_eq!(summary["total"], 3);
    // only the last tick is tight, imbalanced and active enough
    assert_eq!(summary["counts"]["favorable"], 1);
    assert_eq!(summary["overall"], "spread_too_wide");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn custom_thresholds_change_decisions() {
    let dir = workdir();
    let input = dir.join("market.jsonl");
    fs::write(&input, TICKS).unwrap();
    let config = dir.join("config.toml");
    fs::write(
        &config,
        "[decision_thresholds]\nspread_max = 1.0\nimbalance_min = 0.0\nintensity_min = 0\n",
    )
    .unwrap();

    let status = microanalyse()
        .arg("--input")
        .arg(&input)
        .arg("--outdir")
        .arg(&dir)
        .args(["--ticker", "QQQ"])
        .env("MICROSCOPE_CONFIG", &config)
        .status()
        .unwrap();
    assert!(status.success());

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("QQQ_records.json")).unwrap()).unwrap();
    assert!(
        records
            .as_object()
            .unwrap()
            .values()
            .all(|r| r["decision"] == "favorable")
    );
    assert!(!dir.join("QQQ_summary.json").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rejects_zero_batch_size() {
    let dir = workdir();
    let input = dir.join("market.jsonl");
    fs::write(&input, TICKS).unwrap();

    let output = microanalyse()
        .arg("--input")
        .arg(&input)
        .arg("--outdir")
        .arg(&dir)
        .args(["--ticker", "SPY", "--batch-size", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("batch size"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_input_fails() {
    let dir = workdir();
    let input = dir.join("market.jsonl");
    fs::write(&input, "{\"timestamp\": 1000}\n").unwrap();

    let output = microanalyse()
        .arg("--input")
        .arg(&input)
        .arg("--outdir")
        .arg(&dir)
        .args(["--ticker", "SPY"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.join("SPY_records.json").exists());

    fs::remove_dir_all(&dir).ok();
}
