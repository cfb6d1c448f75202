//! API client abstraction
//!
//! `BiasApi` is the seam between the views and the remote services.
//! `HttpBiasApi` talks to the real endpoints, `FakeBiasApi` replays scripted
//! responses for tests.

use crate::api::{
    AnalyzeRequest, ExtractRequest, ExtractResponse, RawAnalysis, RewriteRequest, RewriteResponse,
};
use crate::config::ApiConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;

/// Remote extraction, analysis and rewrite services
#[async_trait]
pub trait BiasApi: Send + Sync {
    /// Fetch an article and return its plain text
    async fn extract_text(&self, url: &str) -> Result<String, ApiError>;

    /// Run framing/spectrum analysis over a text
    async fn analyze(&self, text: &str) -> Result<RawAnalysis, ApiError>;

    /// Return a neutralized version of a text
    async fn rewrite(&self, text: &str) -> Result<String, ApiError>;
}

/// Real client implementation using HTTP
pub struct HttpBiasApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpBiasApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        tracing::debug!(endpoint = url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidJson {
            endpoint: url.to_string(),
            message: e.to_string(),
        })
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                endpoint: url.to_string(),
                secs: self.config.timeout_secs,
            }
        } else {
            ApiError::Http {
                endpoint: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl BiasApi for HttpBiasApi {
    async fn extract_text(&self, url: &str) -> Result<String, ApiError> {
        let request = ExtractRequest::new(url, self.config.extract_fields.as_str());
        let response: ExtractResponse = self.post_json(&self.config.extract_url(), &request).await?;
        Ok(response.text)
    }

    async fn analyze(&self, text: &str) -> Result<RawAnalysis, ApiError> {
        let request = AnalyzeRequest {
            text: text.to_string(),
        };
        self.post_json(&self.config.analyze_url(), &request).await
    }

    async fn rewrite(&self, text: &str) -> Result<String, ApiError> {
        let request = RewriteRequest {
            text: text.to_string(),
        };
        let response: RewriteResponse = self.post_json(&self.config.rewrite_url, &request).await?;
        Ok(response.unbiased_text)
    }
}

/// Scripted replies for one operation
///
/// A single remaining reply is returned forever; longer scripts are consumed
/// front to back.
struct Script<T> {
    name: &'static str,
    replies: Vec<Result<T, ApiError>>,
    inputs: Vec<String>,
}

impl<T: Clone> Script<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            replies: Vec::new(),
            inputs: Vec::new(),
        }
    }

    fn next(&mut self, input: &str) -> Result<T, ApiError> {
        self.inputs.push(input.to_string());
        match self.replies.len() {
            0 => Err(ApiError::Script(self.name)),
            1 => self.replies[0].clone(),
            _ => self.replies.remove(0),
        }
    }
}

/// Fake client for testing
pub struct FakeBiasApi {
    extract: Mutex<Script<String>>,
    analyze: Mutex<Script<RawAnalysis>>,
    rewrite: Mutex<Script<String>>,
}

impl Default for FakeBiasApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBiasApi {
    /// A fake with no scripted replies; every call fails
    pub fn new() -> Self {
        Self {
            extract: Mutex::new(Script::new("extract_text")),
            analyze: Mutex::new(Script::new("analyze")),
            rewrite: Mutex::new(Script::new("rewrite")),
        }
    }

    pub fn with_extract(self, reply: Result<String, ApiError>) -> Self {
        lock(&self.extract).replies.push(reply);
        self
    }

    pub fn with_analysis(self, reply: Result<RawAnalysis, ApiError>) -> Self {
        lock(&self.analyze).replies.push(reply);
        self
    }

    pub fn with_rewrite(self, reply: Result<String, ApiError>) -> Self {
        lock(&self.rewrite).replies.push(reply);
        self
    }

    /// URLs passed to `extract_text`, in call order
    pub fn extract_calls(&self) -> Vec<String> {
        lock(&self.extract).inputs.clone()
    }

    /// Texts passed to `analyze`, in call order
    pub fn analyze_calls(&self) -> Vec<String> {
        lock(&self.analyze).inputs.clone()
    }

    /// Texts passed to `rewrite`, in call order
    pub fn rewrite_calls(&self) -> Vec<String> {
        lock(&self.rewrite).inputs.clone()
    }

    pub fn total_calls(&self) -> usize {
        self.extract_calls().len() + self.analyze_calls().len() + self.rewrite_calls().len()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // A panicking test thread must not hide the recorded calls
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl BiasApi for FakeBiasApi {
    async fn extract_text(&self, url: &str) -> Result<String, ApiError> {
        lock(&self.extract).next(url)
    }

    async fn analyze(&self, text: &str) -> Result<RawAnalysis, ApiError> {
        lock(&self.analyze).next(text)
    }

    async fn rewrite(&self, text: &str) -> Result<String, ApiError> {
        lock(&self.rewrite).next(text)
    }
}
