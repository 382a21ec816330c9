//! Test helpers: an in-process guide API and a log capture.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};
use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Guide API served by axum on an ephemeral local port.
///
/// Unregistered paths answer `404 Not Found`.
pub struct MockGuideApi {
    base_url: String,
    state: MockState,
}

impl MockGuideApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(serve).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_json(self, path: &str, body: serde_json::Value) -> Self {
        self.respond(path, StatusCode::OK, body.to_string())
    }

    pub fn with_body(self, path: &str, body: &str) -> Self {
        self.respond(path, StatusCode::OK, body.to_string())
    }

    pub fn with_status(self, path: &str, status: StatusCode) -> Self {
        self.respond(path, status, String::new())
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    fn respond(self, path: &str, status: StatusCode, body: String) -> Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
        self
    }
}

async fn serve(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    let response = state.responses.lock().unwrap().get(&path).cloned();
    let (status, body) = response.unwrap_or((StatusCode::NOT_FOUND, String::new()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Index with guides in every category.
pub fn index_json() -> serde_json::Value {
    serde_json::json!({
        "name": "AI Developer Guide API",
        "description": "API for AI Developer Guide",
        "version": "1.0.0",
        "source": "https://github.com/dwmkerr/ai-developer-guide",
        "lastUpdated": "2024-01-01",
        "endpoints": {
            "main_guide": { "path": "/api/guide.json", "description": "Main guide content" },
            "language_guides": {
                "python": { "path": "/api/guides/languages/python.json", "description": "Python development guide" },
                "shell-scripts": { "path": "/api/guides/languages/shell-scripts.json", "description": "Shell scripting guide" }
            },
            "pattern_guides": {
                "cicd": { "path": "/api/guides/patterns/cicd.json", "description": "CI/CD patterns" }
            },
            "platform_guides": {
                "postgresql": { "path": "/api/guides/platforms/postgresql.json", "description": "PostgreSQL guide" }
            },
            "other_guides": {
                "make": { "path": "/api/guides/others/make.json", "description": "Makefile guide" }
            }
        }
    })
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run a future with a thread-local subscriber and return its output with the logs.
///
/// Requires the current-thread runtime used by `#[tokio::test]`.
pub async fn capture_logs<F: Future>(future: F) -> (F::Output, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    let output = {
        let _guard = tracing::subscriber::set_default(subscriber);
        future.await
    };

    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (output, logs)
}
