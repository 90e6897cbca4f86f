use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the presentation layer shows: the busy indicator and the output text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub busy: bool,
    pub output: String,
}

/// A response that made it back with a decodable JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    Success(Value),
    Failure { status: u16, detail: String },
}

impl InferenceResult {
    pub fn from_response(response: ServiceResponse) -> Self {
        if (200..300).contains(&response.status) {
            return Self::Success(response.body);
        }

        Self::Failure {
            status: response.status,
            detail: extract_detail(&response.body),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

// FastAPI puts a string in `detail` for HTTPException and a list of
// validation problems for 422s. A missing, null, false or empty detail
// falls back to the whole body.
fn extract_detail(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            body.to_string()
        }
        Some(other) => other.to_string(),
    }
}

/// Shape of a successful `/predict` body. Only read for logging; every
/// field is optional because the rendered output never depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    pub model_name: Option<String>,
    pub task: Option<String>,
    pub predictions: Option<Value>,
    pub worker_pid: Option<u32>,
    pub total_request_time_ms: Option<f64>,
    pub inference_execution_time_ms: Option<f64>,
    pub pipeline_from_lru_cache: Option<bool>,
}

impl PredictionEnvelope {
    pub fn from_body(body: &Value) -> Option<Self> {
        if !body.is_object() {
            return None;
        }
        serde_json::from_value(body.clone()).ok()
    }
}
