use axum::{Router, routing::get};

use super::handlers::get_share_card;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_share_card))
}
