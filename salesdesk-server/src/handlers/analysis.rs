use axum::{Json, extract::rejection::JsonRejection};
use salesdesk_core::analysis;
use salesdesk_model::{AnalyzeStringRequest, AnalyzeStringResponse};
use tracing::debug;

use crate::infra::errors::AppResult;

/// Find the first unique vowel that follows a vowel-consonant pair
///
/// # Request
///
/// ```json
/// { "string": "aAbBABacafe" }
/// ```
///
/// # Response
///
/// ```json
/// { "string": "aAbBABacafe", "vogal": "e", "tempoTotal": "0.01ms" }
/// ```
///
/// A missing or `null` `string` is analyzed as the empty string.
pub async fn analyze_string(
    payload: Result<Json<AnalyzeStringRequest>, JsonRejection>,
) -> AppResult<Json<AnalyzeStringResponse>> {
    let Json(request) = payload?;
    let response = analysis::analyze(request.into_input());
    debug!(
        chars = response.string.chars().count(),
        vowel = %response.vogal,
        elapsed = %response.total_time,
        "string analyzed"
    );
    Ok(Json(response))
}
