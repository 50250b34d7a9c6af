//! Research API handler.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use scout_core::research::{self, model::ResearchRequest, model::ResearchResult};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/research - Answer a query after the simulated delay.
///
/// Malformed JSON and a wrong content type get axum's default rejections.
/// A body that is not a JSON object, or whose `query` is not a string,
/// answers 422.
pub async fn research(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ResearchResult>, ApiError> {
    if !body.is_object() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Request body must be a JSON object",
        ));
    }
    let req: ResearchRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let query = research::validate_query(req.query.as_deref()).map_err(|e| {
        debug!("Rejected research request without a query");
        ApiError::from(e)
    })?;

    info!(query_len = query.len(), "Researching query");
    let result = research::research_with_models(query, state.config.research_delay).await;

    Ok(Json(result))
}
