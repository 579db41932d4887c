use crate::routes::AppState;
use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    response::{Html, IntoResponse, Response},
};

/// Liveness probe. Browsers get a small page, everything else plain `ok`.
pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if accepts_html(&headers) {
        Html(crate::views::health::render_health(state.flags.len())).into_response()
    } else {
        "ok".into_response()
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("text/html"))
}
