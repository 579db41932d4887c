use crate::params::RequestParams;
use crate::routes::AppState;
use crate::status_page::{evaluate, render_notices, REFRESH_SECONDS};
use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::debug;

type Pairs = Vec<(String, String)>;

/// Answers any path and method with the maintenance page.
///
/// Parameters that cannot be decoded are treated as absent.
pub async fn maintenance_page(
    State(state): State<AppState>,
    method: Method,
    query: Option<Query<Pairs>>,
    form: Option<Form<Pairs>>,
) -> Result<Response, (StatusCode, String)> {
    let query = query.map(|Query(pairs)| pairs).unwrap_or_default();
    // A form extractor on GET/HEAD reads the query string again.
    let body = if method == Method::GET || method == Method::HEAD {
        Vec::new()
    } else {
        form.map(|Form(pairs)| pairs).unwrap_or_default()
    };
    let params = RequestParams::from_request_parts(query, body);

    let notices = evaluate(&params, &state.flags);
    debug!(params = params.len(), notices = notices.len(), "rendering maintenance page");
    let html = render_notices(&notices)
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;

    Ok((
        StatusCode::SERVICE_UNAVAILABLE,
        [
            (header::RETRY_AFTER, REFRESH_SECONDS.to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        Html(html),
    )
        .into_response())
}
