use async_trait::async_trait;
use hf_inference_console::{
    Error, Result,
    composer::InferenceRequest,
    config::ProbeKind,
    dispatch::{InferenceTransport, ServiceResponse},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock transport that replays queued responses and records what it was sent
#[derive(Debug, Clone)]
pub struct MockTransport {
    pub responses: Arc<Mutex<Vec<ServiceResponse>>>,
    pub requests: Arc<Mutex<Vec<InferenceRequest>>>,
    pub probes: Arc<Mutex<Vec<ProbeKind>>>,
    pub error: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            probes: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, status: u16, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(ServiceResponse { status, body });
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn get_probes(&self) -> Vec<ProbeKind> {
        self.probes.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<ServiceResponse> {
        if let Some(ref error) = self.error {
            return Err(Error::transport(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

#[async_trait]
impl InferenceTransport for MockTransport {
    async fn predict(&self, request: &InferenceRequest) -> Result<ServiceResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.next_response()
    }

    async fn probe(&self, kind: ProbeKind) -> Result<ServiceResponse> {
        self.probes.lock().unwrap().push(kind);
        self.next_response()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport whose requests never settle
pub struct HangingTransport;

#[async_trait]
impl InferenceTransport for HangingTransport {
    async fn predict(&self, _request: &InferenceRequest) -> Result<ServiceResponse> {
        std::future::pending().await
    }

    async fn probe(&self, _kind: ProbeKind) -> Result<ServiceResponse> {
        std::future::pending().await
    }
}
