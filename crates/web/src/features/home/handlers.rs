use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use football::StreakData;
use serde::Serialize;
use storage::dto::VoteCounts;
use utoipa::ToSchema;

use crate::error::WebError;
use crate::features::{streak, votes};
use crate::state::AppState;

/// Everything the landing page renders in one payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub streak: StreakData,
    /// Totals for the next match; null without a next match or when counting failed
    pub votes: Option<VoteCounts>,
    pub tagline: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Streak, next-match votes and a tagline", body = HomeResponse)
    ),
    tag = "streak"
)]
pub async fn get_home(State(state): State<AppState>) -> Result<Response, WebError> {
    let data = streak::services::streak_or_default(state.matches.as_ref(), &state.streak).await;

    let counts = match &data.next_match {
        Some(next) => {
            match votes::services::get_vote_counts(state.votes.as_ref(), &next.match_id).await {
                Ok(counts) => Some(counts),
                Err(e) => {
                    tracing::warn!("Could not count votes for {}: {}", next.match_id, e);
                    None
                }
            }
        }
        None => None,
    };

    let tagline = state
        .hype
        .pick(&mut rand::thread_rng())
        .map(str::to_string);

    Ok(Json(HomeResponse {
        streak: data,
        votes: counts,
        tagline,
    })
    .into_response())
}
