use crate::api::{ApiError, AppState};
use crate::model::AnalysisResult;
use axum::{extract::State, Json};

pub const BANNER: &str = "Producer Intervals API";

/// Handler for GET /
pub async fn index() -> &'static str {
    BANNER
}

/// Handler for GET /producers/intervals
pub async fn producer_intervals(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.service.producer_intervals().await?;
    Ok(Json(result))
}
