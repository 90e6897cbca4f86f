//! Turns raw form fields into an [`InferenceRequest`].
//!
//! Rules run in a fixed order (model, inputs, parameters) and the first
//! failing rule decides the [`ValidationError`]. Nothing here touches the
//! network or the view.

mod types;

pub use types::*;

use crate::catalog::CUSTOM_MODEL;
use crate::error::ValidationError;
use serde_json::{Map, Value};
use tracing::debug;

pub fn compose(raw: &RawFormState) -> Result<InferenceRequest, ValidationError> {
    let model_name = resolve_model(raw)?;
    // Empty task labels are forwarded untouched.
    let task = raw.task_selector.clone();
    let inputs = resolve_inputs(&raw.free_text)?;
    let parameters = resolve_parameters(&raw.extra_params_text)?;

    debug!(
        "Composed request for model '{}', task '{}' with {} input(s)",
        model_name,
        task,
        inputs.len()
    );

    Ok(InferenceRequest {
        model_name,
        task,
        inputs,
        parameters,
    })
}

fn resolve_model(raw: &RawFormState) -> Result<String, ValidationError> {
    if raw.model_selector != CUSTOM_MODEL {
        return Ok(raw.model_selector.clone());
    }

    let custom = raw.custom_model_text.trim();
    if custom.is_empty() {
        return Err(ValidationError::MissingCustomModel);
    }
    Ok(custom.to_string())
}

fn resolve_inputs(free_text: &str) -> Result<InferenceInputs, ValidationError> {
    let trimmed = free_text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    if !trimmed.contains('\n') {
        return Ok(InferenceInputs::Single(trimmed.to_string()));
    }

    let lines = trimmed
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(InferenceInputs::Batch(lines))
}

fn resolve_parameters(extra_params_text: &str) -> Result<Map<String, Value>, ValidationError> {
    let trimmed = extra_params_text.trim();
    if trimmed.is_empty() {
        return Ok(Map::new());
    }

    serde_json::from_str::<Map<String, Value>>(trimmed).map_err(|e| {
        debug!("Rejecting pipeline kwargs: {}", e);
        ValidationError::MalformedParameters
    })
}
