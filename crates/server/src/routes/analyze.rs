use crate::error::ServerResult;
use crate::state::ServerState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use std::sync::Arc;

/// Request to analyze a single word
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The word to score. A missing field deserializes to an empty string,
    /// which the scorer rejects before any embedding call is made.
    #[serde(default)]
    pub word: String,
}

/// Analyze how ambiguous a word is.
///
/// Embeds the word plus the sixteen fixed context words, compares the word
/// against each category centroid, and classifies the result by its best
/// similarity.
///
/// # Example
/// ```json
/// // Request
/// { "word": "file" }
///
/// // Response
/// {
///   "word": "file",
///   "contexts": { "technical": 0.81, "emotional": 0.12, "physical": 0.33, "abstract": 0.29 },
///   "clarity": {
///     "score": 81.0,
///     "ambiguity": 0.19,
///     "interpretation": "Clear word",
///     "recommendation": "Good choice for prompting",
///     "level": "low",
///     "emoji": "✅"
///   }
/// }
/// ```
pub async fn analyze_word(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ServerResult<impl IntoResponse> {
    let analysis = state.scorer.analyze(&request.word).await?;
    Ok(Json(analysis))
}
