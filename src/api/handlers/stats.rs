use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::domain::services::stats::roster_stats;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.membership_service.list_members().await?;
    let today = Utc::now().date_naive();
    Ok(Json(roster_stats(&members, today)))
}
