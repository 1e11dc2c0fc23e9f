use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};

use super::services::{self, OgParams};

#[utoipa::path(
    get,
    path = "/api/og",
    params(OgParams),
    responses(
        (status = 200, description = "1200x630 SVG share card", content_type = "image/svg+xml", body = String)
    ),
    tag = "og"
)]
pub async fn get_share_card(Query(params): Query<OgParams>) -> Response {
    let svg = services::render_card(&params);

    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}
