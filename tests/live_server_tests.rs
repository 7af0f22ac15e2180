//! Live Server Tests
//!
//! Binds a real server on an ephemeral port and drives it over HTTP, both
//! with raw requests and through a session using an HTTP backend.

use std::net::SocketAddr;

use calculator_server::{
    history::MemoryStore,
    session::{HttpBackend, Session, Status},
    Config, Operation, Server,
};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

// == Helper Functions ==

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let server = Server::bind(&Config::default().with_port(0)).await.unwrap();
        let port = server.local_addr().unwrap().port();
        let (shutdown, rx) = oneshot::channel();

        let handle = tokio::spawn(server.run_until(async move {
            let _ = rx.await;
        }));

        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], port)),
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        tokio_test::assert_ok!(self.handle.await.unwrap());
    }
}

// == Raw HTTP Tests ==

#[tokio::test]
async fn test_live_add() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.url("/api/calculator/add"))
        .json(&json!({"num1": 2, "num2": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["result"], 5.0);

    server.stop().await;
}

#[tokio::test]
async fn test_live_not_found() {
    let server = TestServer::start().await;

    let response = reqwest::get(server.url("/missing/page")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("/missing/page"));

    server.stop().await;
}

#[tokio::test]
async fn test_live_concurrent_requests() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|n| {
        let client = client.clone();
        let url = server.url("/api/calculator/multiply");
        async move {
            let body: Value = client
                .post(url)
                .json(&json!({"num1": n, "num2": 2}))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            (n, body["result"].as_f64().unwrap())
        }
    });

    for handle in requests.map(tokio::spawn).collect::<Vec<_>>() {
        let (n, result) = handle.await.unwrap();
        assert_eq!(result, f64::from(n) * 2.0);
    }

    server.stop().await;
}

// == Session over HTTP ==

#[tokio::test]
async fn test_session_chains_over_http() {
    let server = TestServer::start().await;
    let backend = HttpBackend::new(server.url(""));
    let mut session = Session::new(backend, MemoryStore::new());

    for key in ["2", "+", "3", "=", "+", "4", "="] {
        session.handle_key(key).await.unwrap();
    }

    assert_eq!(session.display(), "9");
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().entries()[0].expression, "5 + 4");

    server.stop().await;
}

#[tokio::test]
async fn test_session_surfaces_server_error() {
    let server = TestServer::start().await;
    let backend = HttpBackend::new(server.url(""));
    let mut session = Session::new(backend, MemoryStore::new());

    for key in ["8", "/", "0"] {
        session.handle_key(key).await.unwrap();
    }
    let result = session.handle_key("Enter").await;

    let err = tokio_test::assert_err!(result);
    assert_eq!(err.kind(), "InvalidOperation");
    assert_eq!(session.status(), Status::Error);

    server.stop().await;
}

#[tokio::test]
async fn test_session_keeps_overflowing_result() {
    let server = TestServer::start().await;
    let mut session = Session::new(HttpBackend::new(server.url("")), MemoryStore::new());

    for key in ["1", "0"] {
        session.handle_key(key).await.unwrap();
    }
    session.press_operator(Operation::Power).await.unwrap();
    for key in ["4", "0", "0", "="] {
        session.handle_key(key).await.unwrap();
    }

    assert_eq!(session.display(), "Infinity");
    assert_eq!(session.first_operand(), Some(f64::INFINITY));
    assert!(session.history().entries()[0].result.is_none());

    // JSON has no Infinity, so chaining from it is rejected rather than dropped
    for key in ["-", "1"] {
        session.handle_key(key).await.unwrap();
    }
    let err = tokio_test::assert_err!(session.handle_key("=").await);
    assert_eq!(err.kind(), "InvalidInput");
    assert_eq!(session.status(), Status::Error);

    server.stop().await;
}
