//! Shared utilities for integration tests.

use std::future::Future;
use std::sync::Arc;

use character_browser::catalog::Character;
use character_browser::state::{CatalogStore, LoadState};
use character_browser::{AppConfig, HttpServer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// The three-character scenario used across tests.
#[allow(dead_code)]
pub fn scenario() -> Vec<Character> {
    let mut rick = Character::new(1, "Rick Sanchez", "Human", "Alive");
    rick.image = "https://rickandmortyapi.com/api/character/avatar/1.jpeg".into();
    rick.origin.name = "Earth (C-137)".into();
    vec![
        rick,
        Character::new(2, "Morty Smith", "Human", "Dead"),
        Character::new(3, "Bird Person", "Alien", "Dead"),
    ]
}

/// Upstream payload for [`scenario`], in the public API's paged shape.
#[allow(dead_code)]
pub fn scenario_payload() -> String {
    serde_json::json!({
        "info": { "count": 3, "pages": 1, "next": null, "prev": null },
        "results": scenario(),
    })
    .to_string()
}

/// Router over a store already in `state`.
#[allow(dead_code)]
pub fn app_with_state(state: LoadState) -> axum::Router {
    let store = Arc::new(CatalogStore::with_state(state));
    HttpServer::new(AppConfig::default(), store).router()
}

/// Start a programmable mock upstream on an ephemeral port; returns its base URL.
///
/// Every connection gets `f()`'s `(status, body)` as a JSON response.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> String
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // drain the request head before answering
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{}/api/character", addr)
}

/// Start a mock upstream that always answers 200 with `body`.
#[allow(dead_code)]
pub async fn start_mock_backend(body: String) -> String {
    start_programmable_backend(move || {
        let body = body.clone();
        async move { (200, body) }
    })
    .await
}
