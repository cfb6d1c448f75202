//! Run workflows - the request chain behind each view's "run" action
//!
//! Callers are responsible for refusing blank input before calling in here.

use crate::analysis::AnalysisReport;
use crate::client::BiasApi;
use crate::error::ApiError;
use crate::types::InputMode;

/// Analyze text, or extract an article first when `mode` is `Url`
pub async fn run_analysis(
    api: &dyn BiasApi,
    mode: InputMode,
    input: &str,
) -> Result<AnalysisReport, ApiError> {
    let text = match mode {
        InputMode::Text => input.to_string(),
        InputMode::Url => {
            let extracted = api.extract_text(input).await?;
            tracing::debug!(chars = extracted.chars().count(), "article extracted");
            extracted
        }
    };

    let raw = api.analyze(&text).await?;
    Ok(AnalysisReport::from_raw(raw))
}

/// Neutralize a text
pub async fn run_rewrite(api: &dyn BiasApi, input: &str) -> Result<String, ApiError> {
    api.rewrite(input).await
}
