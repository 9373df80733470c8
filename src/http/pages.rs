//! HTML page handlers.
//!
//! Every HTML path goes through [`page`]: the request path is parsed into a
//! [`Route`], resolved into a [`View`] against the current snapshot, and
//! rendered. The axum routes for `/` and `/character/{id}` and the fallback
//! all land here, so a path the route table misses (`/character/2/`) still
//! resolves the same way.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::catalog::FilterState;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render;
use crate::routing::{Route, View};

/// `GET /`, `GET /character/{id}` and any unrouted path.
pub async fn page(
    State(state): State<AppState>,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let route = Route::from_path(uri.path());
    let snapshot = state.store.snapshot();
    let view = View::resolve(route, &snapshot);

    tracing::debug!(
        path = %uri.path(),
        route = ?route,
        view = view.label(),
        load_state = snapshot.label(),
        "Resolved view"
    );

    match view {
        View::List => {
            let filters = FilterState::from_query(query.as_deref().unwrap_or_default());
            let html = render::list_page(&state.ui.title, &snapshot, &filters);
            metrics::record_request(view.label(), 200, start);
            Html(html).into_response()
        }
        View::Detail(character) => {
            let html = render::detail_page(&state.ui.title, character);
            metrics::record_request(view.label(), 200, start);
            Html(html).into_response()
        }
        View::NotFound => {
            metrics::record_request(view.label(), 404, start);
            (StatusCode::NOT_FOUND, Html(render::not_found_page(&state.ui.title))).into_response()
        }
    }
}
