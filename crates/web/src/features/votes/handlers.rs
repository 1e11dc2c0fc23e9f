use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::dto::{CastVoteRequest, VoteCounts};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/vote",
    request_body = CastVoteRequest,
    responses(
        (status = 200, description = "Vote registered, updated totals returned", body = VoteCounts),
        (status = 400, description = "Missing matchId or vote other than yes/no"),
        (status = 500, description = "Vote could not be stored")
    ),
    tag = "votes"
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    payload: Result<Json<CastVoteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let choice = payload.choice()?;

    let counts = services::cast_vote(state.votes.as_ref(), &payload.match_id, choice).await?;

    Ok(Json(counts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/votes/{match_id}",
    params(
        ("match_id" = String, Path, description = "Match identifier, e.g. MUN-ARS-2025-03-09")
    ),
    responses(
        (status = 200, description = "Yes/no totals for the match", body = VoteCounts)
    ),
    tag = "votes"
)]
pub async fn get_vote_counts(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Response, WebError> {
    let counts = services::get_vote_counts(state.votes.as_ref(), &match_id).await?;

    Ok(Json(counts).into_response())
}
