use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{cast_vote, get_vote_counts};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/vote", post(cast_vote))
        .route("/api/votes/:match_id", get(get_vote_counts))
}
