use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field values exactly as the presentation layer read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFormState {
    #[serde(default)]
    pub model_selector: String,
    #[serde(default)]
    pub custom_model_text: String,
    #[serde(default)]
    pub task_selector: String,
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub extra_params_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InferenceInputs {
    Single(String),
    Batch(Vec<String>),
}

impl InferenceInputs {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wire body for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub model_name: String,
    pub task: String,
    pub inputs: InferenceInputs,
    #[serde(rename = "pipeline_kwargs", default)]
    pub parameters: Map<String, Value>,
}
