//! Wire types for the remote extraction, analysis and rewrite services
//!
//! The analysis payload is consumed ad hoc: every nested object and field is
//! optional and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Field selector sent with every extraction request
pub const EXTRACT_FIELDS_RAW_TEXT: &str = "raw_text";

/// POST body for the extraction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    pub fields: String,
}

impl ExtractRequest {
    pub fn new(url: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fields: fields.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// POST body for the analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Raw analysis response as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysis {
    #[serde(default)]
    pub angle: Option<RawAngle>,
    #[serde(default)]
    pub spectrum: Option<RawSpectrum>,
    #[serde(default)]
    pub reflection: Option<RawReflection>,
}

/// Framing / emotion breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAngle {
    #[serde(default)]
    pub angle_summary: Option<String>,
    #[serde(default)]
    pub framing_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub dominant_emotions: Option<Vec<String>>,
    #[serde(default)]
    pub evidence_spans: Option<Vec<String>>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Political spectrum scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSpectrum {
    #[serde(default)]
    pub left_right_score: Option<f64>,
    #[serde(default)]
    pub cluster: Option<String>,
    /// Number or string depending on the service version
    #[serde(default)]
    pub populist_score: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReflection {
    #[serde(default)]
    pub first: Option<RawReflectionPass>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReflectionPass {
    #[serde(default)]
    pub raw_response: Option<String>,
}

/// POST body for the rewrite endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub unbiased_text: String,
}
