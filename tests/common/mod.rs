//! Shared utilities for integration testing against a mock dashboard.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

/// A request as seen by the mock dashboard.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub request_id: Option<String>,
}

impl RecordedRequest {
    /// Values of `key` in the query string, in order.
    #[allow(dead_code)]
    pub fn query_values(&self, key: &str) -> Vec<String> {
        let query = self.query.clone().unwrap_or_default();
        url::form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }
}

struct MockState {
    status: u16,
    body: String,
    delay: Duration,
    location: Option<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running mock dashboard.
#[derive(Clone)]
pub struct MockDashboard {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockDashboard {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Start a mock dashboard on an ephemeral port that answers every request
/// with `status` and `body` after waiting `delay`.
pub async fn start_mock_dashboard(status: u16, body: &str, delay: Duration) -> MockDashboard {
    serve(MockState {
        status,
        body: body.to_string(),
        delay,
        location: None,
        requests: Mutex::new(Vec::new()),
    })
    .await
}

/// Start a mock dashboard that answers every request with a 302 to `location`.
#[allow(dead_code)]
pub async fn start_redirecting_dashboard(location: &str) -> MockDashboard {
    serve(MockState {
        status: 302,
        body: String::new(),
        delay: Duration::ZERO,
        location: Some(location.to_string()),
        requests: Mutex::new(Vec::new()),
    })
    .await
}

async fn serve(state: MockState) -> MockDashboard {
    let state = Arc::new(state);

    let app = Router::new().fallback(record).with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockDashboard { addr, state }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        api_key: header_value("x-api-key"),
        request_id: header_value("x-request-id"),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(location) = &state.location {
        response_headers.insert(header::LOCATION, HeaderValue::from_str(location).unwrap());
    }

    (
        StatusCode::from_u16(state.status).unwrap(),
        response_headers,
        state.body.clone(),
    )
}

/// An address that refuses connections.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
