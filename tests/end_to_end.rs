//! End-to-end: mock upstream → startup fetch → HTTP server → reqwest client.

use std::net::SocketAddr;
use std::time::Duration;

use character_browser::lifecycle::{serve, Shutdown};
use character_browser::AppConfig;
use serde_json::Value;
use tokio::net::TcpListener;

mod common;

async fn start_app(source_url: String) -> (SocketAddr, Shutdown) {
    let mut config = AppConfig::default();
    config.source.url = source_url;
    config.source.timeout_secs = 2;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = serve(config, listener, rx).await;
    });

    (addr, shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Poll `/health` until the catalog leaves `loading`.
async fn wait_for_catalog(addr: SocketAddr) -> Value {
    let client = client();
    for _ in 0..50 {
        if let Ok(res) = client.get(format!("http://{}/health", addr)).send().await {
            let body: Value = res.json().await.unwrap();
            if body["catalog"] != "loading" {
                return body;
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("catalog never settled");
}

#[tokio::test]
async fn test_fetch_then_filter() {
    let upstream = common::start_mock_backend(common::scenario_payload()).await;
    let (addr, shutdown) = start_app(upstream).await;

    let health = wait_for_catalog(addr).await;
    assert_eq!(health["catalog"], "loaded");
    assert_eq!(health["characters"], 3);

    let body: Value = client()
        .get(format!("http://{}/api/characters?species=Human&status=Dead", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["characters"].as_array().unwrap().len(), 1);
    assert_eq!(body["characters"][0]["id"], 2);

    let res = client()
        .get(format!("http://{}/character/3", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Bird Person"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_failure_surfaces_load_error() {
    let upstream = common::start_programmable_backend(|| async {
        (500, r#"{"error":"internal"}"#.to_string())
    })
    .await;
    let (addr, shutdown) = start_app(upstream).await;

    let health = wait_for_catalog(addr).await;
    assert_eq!(health["catalog"], "error");

    let html = client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Could not load characters"));
    assert!(html.contains("500"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_payload_surfaces_load_error() {
    let upstream = common::start_mock_backend("<html>maintenance</html>".to_string()).await;
    let (addr, shutdown) = start_app(upstream).await;

    let health = wait_for_catalog(addr).await;
    assert_eq!(health["catalog"], "error");

    let res = client()
        .get(format!("http://{}/api/characters", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["state"], "error");
    assert!(body["error"].as_str().unwrap().contains("malformed"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_upstream_surfaces_load_error() {
    // bind then drop to get a port nothing listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let (addr, shutdown) = start_app(format!("http://127.0.0.1:{}/api/character", port)).await;

    let health = wait_for_catalog(addr).await;
    assert_eq!(health["catalog"], "error");

    shutdown.trigger();
}
