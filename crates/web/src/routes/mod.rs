use axum::Router;

use crate::features::{home, og, streak, votes};
use crate::state::AppState;

/// All `/api` routes, with state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/home", home::routes::routes())
        .nest("/api/streak", streak::routes::routes())
        .nest("/api/og", og::routes::routes())
        .merge(votes::routes::routes())
        .with_state(state)
}
