//! One-shot command behavior: exit codes and printed output

use std::path::Path;
use unbias_common::api::RawAnalysis;
use unbias_common::{ApiError, FakeBiasApi, InputMode, UnbiasConfig};
use unbiasctl::commands::{self, OutputOptions};
use unbiasctl::errors::{
    EXIT_EMPTY_INPUT, EXIT_INVALID_RESPONSE, EXIT_SERVICE_UNAVAILABLE, EXIT_SUCCESS,
};

fn analysis() -> RawAnalysis {
    serde_json::from_value(serde_json::json!({
        "angle": {"angle_summary": "Measured", "confidence": 0.5},
        "spectrum": {"cluster": "centrist", "populist_score": 0.1}
    }))
    .unwrap()
}

struct Captured {
    code: i32,
    out: String,
    err: String,
}

async fn run_analyze(api: &FakeBiasApi, mode: InputMode, input: &str, json: bool) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let opts = OutputOptions {
        json,
        ..OutputOptions::default()
    };
    let code = commands::analyze(api, mode, input, opts, &mut out, &mut err)
        .await
        .unwrap();
    Captured {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

async fn run_rewrite(api: &FakeBiasApi, input: &str, json: bool) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let opts = OutputOptions {
        json,
        ..OutputOptions::default()
    };
    let code = commands::rewrite(api, input, opts, &mut out, &mut err)
        .await
        .unwrap();
    Captured {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[tokio::test]
async fn analyze_blank_input_exits_without_request() {
    let api = FakeBiasApi::new().with_analysis(Ok(analysis()));
    let result = run_analyze(&api, InputMode::Text, "  \n", false).await;

    assert_eq!(result.code, EXIT_EMPTY_INPUT);
    assert_eq!(api.total_calls(), 0);
    assert!(result.out.is_empty());
}

#[tokio::test]
async fn analyze_prints_report() {
    let api = FakeBiasApi::new().with_analysis(Ok(analysis()));
    let result = run_analyze(&api, InputMode::Text, "Some article", false).await;

    assert_eq!(result.code, EXIT_SUCCESS);
    assert!(result.out.contains("Measured"));
    assert!(result.out.contains("Confidence: 50%"));
    assert!(result.out.contains("Score: 0.5"));
    assert!(result.out.contains("centrist (Populist: 0.1)"));
}

#[tokio::test]
async fn analyze_json_is_display_ready() {
    let api = FakeBiasApi::new().with_analysis(Ok(analysis()));
    let result = run_analyze(&api, InputMode::Text, "Some article", true).await;

    let value: serde_json::Value = serde_json::from_str(&result.out).unwrap();
    assert_eq!(value["angle_summary"], "Measured");
    assert_eq!(value["political_score"], 0.5);
    assert_eq!(value["framing_patterns"], serde_json::json!([]));
}

#[tokio::test]
async fn analyze_url_trims_link() {
    let api = FakeBiasApi::new()
        .with_extract(Ok("body".to_string()))
        .with_analysis(Ok(analysis()));
    let result = run_analyze(&api, InputMode::Url, "https://example.com/a\n", false).await;

    assert_eq!(result.code, EXIT_SUCCESS);
    assert_eq!(api.extract_calls(), vec!["https://example.com/a".to_string()]);
}

#[tokio::test]
async fn analyze_unreachable_service() {
    let api = FakeBiasApi::new().with_analysis(Err(ApiError::Timeout {
        endpoint: "http://localhost:8000/api/analyze".to_string(),
        secs: 30,
    }));
    let result = run_analyze(&api, InputMode::Text, "text", false).await;

    assert_eq!(result.code, EXIT_SERVICE_UNAVAILABLE);
    assert!(result.err.starts_with("Something went wrong — try again."));
    assert!(result.out.is_empty());
}

#[tokio::test]
async fn rewrite_prints_text() {
    let api = FakeBiasApi::new().with_rewrite(Ok("Neutral wording.".to_string()));
    let result = run_rewrite(&api, "Loaded wording!", false).await;

    assert_eq!(result.code, EXIT_SUCCESS);
    assert!(result.out.contains("Unbiased Result"));
    assert!(result.out.contains("Neutral wording."));
    assert_eq!(api.rewrite_calls(), vec!["Loaded wording!".to_string()]);
}

#[tokio::test]
async fn rewrite_json_output() {
    let api = FakeBiasApi::new().with_rewrite(Ok("Neutral wording.".to_string()));
    let result = run_rewrite(&api, "Loaded wording!", true).await;

    let value: serde_json::Value = serde_json::from_str(&result.out).unwrap();
    assert_eq!(value, serde_json::json!({"unbiased_text": "Neutral wording."}));
}

#[tokio::test]
async fn rewrite_bad_response() {
    let api = FakeBiasApi::new().with_rewrite(Err(ApiError::InvalidJson {
        endpoint: "https://rewrite.example.com/api/unbias".to_string(),
        message: "missing field `unbiased_text`".to_string(),
    }));
    let result = run_rewrite(&api, "text", false).await;

    assert_eq!(result.code, EXIT_INVALID_RESPONSE);
    assert!(result.err.starts_with("Failed to rewrite text — try again."));
}

fn run_config(config: &UnbiasConfig, path: &Path, show_path: bool, init: bool) -> String {
    let mut out = Vec::new();
    let code = commands::config(config, path, show_path, init, &mut out).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
    String::from_utf8(out).unwrap()
}

#[test]
fn config_prints_effective_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = UnbiasConfig::default();
    config.api.timeout_secs = 7;

    let text = run_config(&config, &path, false, false);

    std::fs::write(&path, text).unwrap();
    assert_eq!(UnbiasConfig::load_from(&path).unwrap(), config);
}

#[test]
fn config_path_prints_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unbias").join("config.toml");

    let text = run_config(&UnbiasConfig::default(), &path, true, false);

    assert_eq!(text.trim_end(), path.display().to_string());
    assert!(!path.exists());
}

#[test]
fn config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unbias").join("config.toml");

    let text = run_config(&UnbiasConfig::default(), &path, false, true);

    assert!(text.starts_with("Wrote default config to"));
    assert_eq!(UnbiasConfig::load_from(&path).unwrap(), UnbiasConfig::default());
}

#[test]
fn config_init_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let existing = "[api]\ntimeout_secs = 3\n";
    std::fs::write(&path, existing).unwrap();

    let text = run_config(&UnbiasConfig::default(), &path, false, true);

    assert!(text.starts_with("Config already exists at"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), existing);
}
