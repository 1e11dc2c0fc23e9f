use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use football::StreakData;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/streak",
    responses(
        (status = 200, description = "Current unbeaten run; empty when match data is unavailable", body = StreakData)
    ),
    tag = "streak"
)]
pub async fn get_streak(State(state): State<AppState>) -> Result<Response, WebError> {
    let data = services::streak_or_default(state.matches.as_ref(), &state.streak).await;

    Ok(Json(data).into_response())
}
