use axum::{Router, routing::get};

use super::handlers::get_home;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_home))
}
