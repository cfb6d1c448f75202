//! HttpBiasApi against mocked extraction, analysis and rewrite services

use serde_json::json;
use std::time::Duration;
use unbias_common::{run_analysis, ApiConfig, ApiError, BiasApi, HttpBiasApi, InputMode};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpBiasApi {
    let config = ApiConfig {
        analysis_base_url: server.uri(),
        rewrite_url: format!("{}/api/unbias", server.uri()),
        timeout_secs: 2,
        ..ApiConfig::default()
    };
    HttpBiasApi::new(config).unwrap()
}

#[tokio::test]
async fn test_url_analysis_posts_extract_then_analyze() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/extract-text"))
        .and(body_json(json!({"url": "https://news.example/a", "fields": "raw_text"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Body of the article"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({"text": "Body of the article"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "angle": {
                "angle_summary": "Sympathetic to the protesters",
                "framing_patterns": ["hero framing"],
                "confidence": 0.5
            },
            "spectrum": {"left_right_score": 0.3, "cluster": "progressive", "populist_score": 0.1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let report = run_analysis(&api, InputMode::Url, "https://news.example/a")
        .await
        .unwrap();

    assert_eq!(report.angle_summary, "Sympathetic to the protesters");
    assert_eq!(report.framing_patterns, vec!["hero framing".to_string()]);
    assert_eq!(report.confidence_percent(), 50);
    assert_eq!(report.political_score, 0.3);
    assert_eq!(report.political_summary, "progressive (Populist: 0.1)");
    assert_eq!(report.reflection, "");
}

#[tokio::test]
async fn test_rewrite_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/unbias"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "They DESTROYED the economy"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"unbiased_text": "Their policies affected the economy"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let rewritten = api.rewrite("They DESTROYED the economy").await.unwrap();
    assert_eq!(rewritten, "Their policies affected the economy");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.analyze("text").await.unwrap_err();

    match err {
        ApiError::Status { status, endpoint } => {
            assert_eq!(status, 503);
            assert!(endpoint.ends_with("/api/analyze"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/unbias"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.rewrite("text").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidJson { .. }));
    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn test_missing_required_field_is_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/extract-text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "no text here"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.extract_text("https://news.example").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidJson { .. }));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.analyze("text").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Timeout {
            endpoint: format!("{}/api/analyze", server.uri()),
            secs: 2,
        }
    );
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_unreachable_service_is_http_error() {
    let config = ApiConfig {
        analysis_base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..ApiConfig::default()
    };
    let api = HttpBiasApi::new(config).unwrap();

    let err = api.analyze("text").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { .. }));
}
