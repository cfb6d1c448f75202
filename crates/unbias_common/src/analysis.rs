//! Analysis report - display-friendly view of a raw analysis response

use crate::api::RawAnalysis;
use serde::{Deserialize, Serialize};

pub const NO_SUMMARY: &str = "No summary detected";
pub const NO_POLITICAL_SCORING: &str = "No political scoring";

/// Left/right score shown when the service does not provide one
pub const NEUTRAL_POLITICAL_SCORE: f64 = 0.5;

/// Flattened analysis result, every field already resolved to its fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub angle_summary: String,
    pub framing_patterns: Vec<String>,
    pub dominant_emotions: Vec<String>,
    pub evidence_spans: Vec<String>,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    pub political_score: f64,
    pub political_summary: String,
    /// Free-text model reflection, empty when absent
    pub reflection: String,
}

/// A titled list of tags rendered as one row of chips
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagGroup<'a> {
    pub title: &'static str,
    pub items: &'a [String],
}

impl AnalysisReport {
    pub fn from_raw(raw: RawAnalysis) -> Self {
        let angle = raw.angle.unwrap_or_default();
        let spectrum = raw.spectrum.unwrap_or_default();

        let angle_summary = angle
            .angle_summary
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());

        // Zero and NaN count as "no confidence reported"
        let confidence = angle
            .confidence
            .filter(|c| *c != 0.0 && !c.is_nan())
            .unwrap_or(0.0);

        let political_score = spectrum.left_right_score.unwrap_or(NEUTRAL_POLITICAL_SCORE);

        let political_summary = match spectrum.cluster.as_deref() {
            Some(cluster) if !cluster.is_empty() => format!(
                "{} (Populist: {})",
                cluster,
                display_populist(spectrum.populist_score.as_ref())
            ),
            _ => NO_POLITICAL_SCORING.to_string(),
        };

        let reflection = raw
            .reflection
            .and_then(|r| r.first)
            .and_then(|first| first.raw_response)
            .unwrap_or_default();

        Self {
            angle_summary,
            framing_patterns: angle.framing_patterns.unwrap_or_default(),
            dominant_emotions: angle.dominant_emotions.unwrap_or_default(),
            evidence_spans: angle.evidence_spans.unwrap_or_default(),
            confidence,
            political_score,
            political_summary,
            reflection,
        }
    }

    /// Confidence as a rounded percentage
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }

    pub fn has_reflection(&self) -> bool {
        !self.reflection.is_empty()
    }

    /// Score label as shown in the spectrum section
    pub fn political_score_label(&self) -> String {
        format!("Score: {}", self.political_score)
    }

    /// Non-empty tag groups, in display order
    pub fn tag_groups(&self) -> Vec<TagGroup<'_>> {
        [
            TagGroup {
                title: "Framing Patterns",
                items: &self.framing_patterns,
            },
            TagGroup {
                title: "Dominant Emotions",
                items: &self.dominant_emotions,
            },
            TagGroup {
                title: "Evidence Spans",
                items: &self.evidence_spans,
            },
        ]
        .into_iter()
        .filter(|group| !group.items.is_empty())
        .collect()
    }
}

/// Missing and null scores both read as "n/a" rather than a raw JSON literal
fn display_populist(score: Option<&serde_json::Value>) -> String {
    match score {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "n/a".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: serde_json::Value) -> RawAnalysis {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_full_response_maps_every_field() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "angle": {
                "angle_summary": "Leans on fear of crime",
                "framing_patterns": ["loaded language", "selective quoting"],
                "dominant_emotions": ["fear"],
                "evidence_spans": ["\"a wave of crime\""],
                "confidence": 0.87
            },
            "spectrum": {
                "left_right_score": 0.72,
                "cluster": "right-populist",
                "populist_score": 0.6
            },
            "reflection": {"first": {"raw_response": "The article frames..."}}
        })));

        assert_eq!(report.angle_summary, "Leans on fear of crime");
        assert_eq!(report.framing_patterns.len(), 2);
        assert_eq!(report.dominant_emotions, vec!["fear".to_string()]);
        assert_eq!(report.confidence_percent(), 87);
        assert_eq!(report.political_score, 0.72);
        assert_eq!(report.political_summary, "right-populist (Populist: 0.6)");
        assert!(report.has_reflection());
        assert_eq!(report.tag_groups().len(), 3);
    }

    #[test]
    fn test_empty_response_uses_fallbacks() {
        let report = AnalysisReport::from_raw(RawAnalysis::default());

        assert_eq!(report.angle_summary, NO_SUMMARY);
        assert!(report.framing_patterns.is_empty());
        assert_eq!(report.confidence, 0.0);
        assert_eq!(report.political_score, NEUTRAL_POLITICAL_SCORE);
        assert_eq!(report.political_summary, NO_POLITICAL_SCORING);
        assert!(!report.has_reflection());
        assert!(report.tag_groups().is_empty());
    }

    #[test]
    fn test_empty_summary_falls_back() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "angle": {"angle_summary": ""}
        })));
        assert_eq!(report.angle_summary, NO_SUMMARY);
    }

    #[test]
    fn test_zero_political_score_is_kept() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "spectrum": {"left_right_score": 0.0}
        })));
        assert_eq!(report.political_score, 0.0);
        assert_eq!(report.political_score_label(), "Score: 0");
    }

    #[test]
    fn test_empty_cluster_means_no_scoring() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "spectrum": {"cluster": "", "populist_score": 0.9}
        })));
        assert_eq!(report.political_summary, NO_POLITICAL_SCORING);
    }

    #[test]
    fn test_cluster_without_populist_score() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "spectrum": {"cluster": "centrist"}
        })));
        assert_eq!(report.political_summary, "centrist (Populist: n/a)");

        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "spectrum": {"cluster": "centrist", "populist_score": null}
        })));
        assert_eq!(report.political_summary, "centrist (Populist: n/a)");
    }

    #[test]
    fn test_string_populist_score_is_unquoted() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "spectrum": {"cluster": "left", "populist_score": "low"}
        })));
        assert_eq!(report.political_summary, "left (Populist: low)");
    }

    #[test]
    fn test_confidence_rounding() {
        let mut report = AnalysisReport::from_raw(RawAnalysis::default());
        report.confidence = 0.346;
        assert_eq!(report.confidence_percent(), 35);
        report.confidence = 0.122;
        assert_eq!(report.confidence_percent(), 12);
        report.confidence = 1.0;
        assert_eq!(report.confidence_percent(), 100);
    }

    #[test]
    fn test_tag_groups_skip_empty_lists() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "angle": {"framing_patterns": [], "dominant_emotions": ["anger"]}
        })));
        let groups = report.tag_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Dominant Emotions");
    }

    #[test]
    fn test_reflection_missing_first_pass() {
        let report = AnalysisReport::from_raw(raw(serde_json::json!({
            "reflection": {"second": {"raw_response": "ignored"}}
        })));
        assert!(!report.has_reflection());
    }
}
