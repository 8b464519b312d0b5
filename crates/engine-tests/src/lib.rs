//! Integration test support for the engine JSON-RPC client.
//!
//! [`MockEngine`] runs an in-process HTTP server on `127.0.0.1` that plays
//! the engine's side of the protocol. Each test decides how the engine
//! answers; the server records every request it receives.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use engine_client::{ClientConfig, EngineClient};
use parking_lot::Mutex;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the mock engine.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Address of the client connection the request arrived on.
    pub peer: SocketAddr,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Request body parsed as JSON.
    pub body: Value,
}

type Handler = Arc<dyn Fn(&Value) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    handler: Handler,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process mock of the engine's HTTP endpoint.
pub struct MockEngine {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    server: JoinHandle<()>,
}

impl MockEngine {
    /// Starts a mock engine answering each request with `handler`.
    ///
    /// The handler receives the parsed request envelope and returns the
    /// status and raw body to send back.
    ///
    /// # Panics
    /// Panics if the listener cannot be bound.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            handler: Arc::new(handler),
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/", post(handle_rpc))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock engine");
        let addr = listener.local_addr().expect("Failed to read local address");

        let server = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Mock engine server failed");
        });

        Self {
            addr,
            requests,
            server,
        }
    }

    /// Starts a mock engine that answers every request the same way.
    pub async fn respond(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::start(move |_| (status, body.clone())).await
    }

    /// Starts a mock engine that answers with a success envelope whose
    /// result is the request's `params` array.
    pub async fn echo() -> Self {
        Self::start(|request| {
            let response = serde_json::json!({
                "error": null,
                "result": request["params"],
                "id": request["id"],
            });
            (StatusCode::OK, response.to_string())
        })
        .await
    }

    /// Port the mock engine listens on.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Creates a client pointed at this mock engine.
    ///
    /// # Errors
    /// Returns error if client creation fails.
    pub fn client(&self) -> Result<EngineClient, engine_client::Error> {
        EngineClient::new(ClientConfig {
            host: self.addr.ip().to_string(),
            port: self.addr.port(),
            timeout: None,
        })
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_rpc(
    State(state): State<MockState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let (status, body) = (state.handler)(&request);

    state.requests.lock().push(RecordedRequest {
        peer,
        content_type,
        body: request,
    });

    (status, [(CONTENT_TYPE, "application/json")], body)
}
