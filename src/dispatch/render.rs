use super::types::InferenceResult;
use crate::Error;

pub const LOADING: &str = "Loading...";
pub const TRANSPORT_FAILURE_PREFIX: &str = "Network error or API unreachable. Check logs. ";

pub fn render_result(result: &InferenceResult) -> String {
    match result {
        InferenceResult::Success(body) => {
            serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
        }
        InferenceResult::Failure { status, detail } => format!("Error {}: {}", status, detail),
    }
}

pub fn render_transport_failure(error: &Error) -> String {
    let message = match error {
        Error::Network(e) => e.to_string(),
        Error::Transport(msg) => msg.clone(),
        other => other.to_string(),
    };
    format!("{}{}", TRANSPORT_FAILURE_PREFIX, message)
}
