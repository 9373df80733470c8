//! JSON handlers mirroring the HTML views.

use std::time::Instant;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::catalog::{apply, distinct, find_by_id, Character, FilterState};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Route;

#[derive(Debug, Serialize)]
pub struct CharacterList<'a> {
    /// `loading`, `loaded` or `error`.
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub filters: &'a FilterState,
    pub total: usize,
    pub characters: Vec<&'a Character>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: &'static str,
    pub characters: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/characters`: filtered collection, same query as the list view.
pub async fn list_characters(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let start = Instant::now();
    let filters = FilterState::from_query(query.as_deref().unwrap_or_default());
    let snapshot = state.store.snapshot();
    let characters = snapshot.characters();

    let body = CharacterList {
        state: snapshot.label(),
        error: snapshot.error(),
        filters: &filters,
        total: characters.len(),
        characters: apply(characters, &filters),
    };

    let response = Json(body).into_response();
    metrics::record_request("api_list", 200, start);
    response
}

/// `GET /api/characters/{id}`.
pub async fn get_character(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let start = Instant::now();
    let snapshot = state.store.snapshot();

    let found = match Route::from_id_segment(&id) {
        Route::Detail(id) => find_by_id(snapshot.characters(), id),
        _ => None,
    };

    match found {
        Some(character) => {
            metrics::record_request("api_detail", 200, start);
            Json(character).into_response()
        }
        None => {
            metrics::record_request("api_detail", 404, start);
            let body = ErrorResponse {
                error: format!("no character with id '{}'", id),
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

/// `GET /api/statuses`: distinct statuses across the full collection.
pub async fn list_statuses(State(state): State<AppState>) -> Json<Vec<String>> {
    let start = Instant::now();
    let snapshot = state.store.snapshot();
    let statuses = distinct(snapshot.characters(), |c| c.status.as_str());
    metrics::record_request("api_statuses", 200, start);
    Json(statuses)
}

/// `GET /health`.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let start = Instant::now();
    let snapshot = state.store.snapshot();
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: snapshot.label(),
        characters: snapshot.characters().len(),
    };
    metrics::record_request("health", 200, start);
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use ::metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };

    use crate::config::UiConfig;
    use crate::state::{CatalogStore, LoadState};

    /// Keeps the name and labels of every counter registered.
    #[derive(Default)]
    struct CounterLog {
        counters: Mutex<Vec<String>>,
    }

    impl Recorder for CounterLog {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let labels: Vec<String> = key
                .labels()
                .map(|label| format!("{}={}", label.key(), label.value()))
                .collect();
            self.counters
                .lock()
                .unwrap()
                .push(format!("{}{{{}}}", key.name(), labels.join(",")));
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    #[test]
    fn test_health_records_request_metric() {
        let state = AppState {
            store: Arc::new(CatalogStore::with_state(LoadState::Loading)),
            ui: UiConfig::default(),
        };
        let recorder = CounterLog::default();

        let Json(body) = ::metrics::with_local_recorder(&recorder, || {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap()
                .block_on(health(State(state)))
        });

        assert_eq!(body.catalog, "loading");
        let counters = recorder.counters.lock().unwrap();
        assert!(counters
            .iter()
            .any(|c| c == "app_requests_total{view=health,status=200}"));
    }
}
