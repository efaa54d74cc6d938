#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use survey_form::config::Config;
use survey_form::models::{SubmissionOutcome, SubmissionPayload};
use survey_form::submission::{PageOrigin, Submitter};
use survey_form::{FormController, FormEvent};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// What the mock backend saw on `/submit`.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    received: Arc<Mutex<Vec<Received>>>,
}

/// A mock submission backend answering every POST with a canned reply.
pub struct MockBackend {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    /// Standard survey controller that treats this backend as its local URL.
    pub fn controller(&self) -> FormController {
        controller_for(&self.base_url())
    }
}

pub fn controller_for(local_base_url: &str) -> FormController {
    let config = Config {
        local_base_url: local_base_url.to_string(),
        ..Config::default()
    };
    FormController::for_origin(config, &PageOrigin::Local)
}

async fn submit(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}

/// Spawn a mock backend on a random port.
pub async fn spawn_backend(status: StatusCode, body: &str) -> MockBackend {
    spawn_slow_backend(status, body, Duration::ZERO).await
}

/// Spawn a mock backend that records each request, then waits `delay` before answering.
pub async fn spawn_slow_backend(status: StatusCode, body: &str, delay: Duration) -> MockBackend {
    init_tracing();

    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.to_string(),
        delay,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/submit", post(submit))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    MockBackend { addr, received }
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_base_url() -> String {
    init_tracing();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Submitter double that records payloads and returns a fixed outcome.
pub struct FakeSubmitter {
    pub outcome: SubmissionOutcome,
    pub calls: Mutex<Vec<SubmissionPayload>>,
}

impl FakeSubmitter {
    pub fn new(outcome: SubmissionOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Submitter for FakeSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        self.calls.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}

/// Submitter double that waits until the test releases an outcome.
pub struct GatedSubmitter {
    gate: Mutex<Option<oneshot::Receiver<SubmissionOutcome>>>,
}

impl GatedSubmitter {
    pub fn new() -> (Arc<Self>, oneshot::Sender<SubmissionOutcome>) {
        let (tx, rx) = oneshot::channel();
        let submitter = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
        });
        (submitter, tx)
    }
}

#[async_trait]
impl Submitter for GatedSubmitter {
    async fn submit(&self, _payload: &SubmissionPayload) -> SubmissionOutcome {
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| SubmissionOutcome::Failure("gate dropped".to_string())),
            None => SubmissionOutcome::Failure("already submitted".to_string()),
        }
    }
}

pub fn input(field: &str, value: &str) -> FormEvent {
    FormEvent::Input {
        field: field.to_string(),
        value: value.to_string(),
    }
}

pub const VALID_FIELDS: [(&str, &str); 7] = [
    ("userName", "Ada Lovelace"),
    ("email", "ada@example.com"),
    ("employeeId", "E-1815"),
    ("tower", "EDL"),
    ("problem", "Knowledge chatbot"),
    ("businessBenefit", "Saves two hours per week per analyst"),
    ("justification", "Manual reconciliation is slow and error prone"),
];

/// Fill every survey field with valid content.
pub async fn fill_valid(controller: &mut FormController) {
    for (field, value) in VALID_FIELDS {
        controller.dispatch(input(field, value)).await;
    }
}
