//! Selectable models and tasks offered by the front end.

use crate::composer::RawFormState;
use tracing::debug;

/// Model selector value that switches to the free-text model field.
pub const CUSTOM_MODEL: &str = "custom";

pub const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_TASK: &str = "sentiment-analysis";

pub const MODELS: &[&str] = &[
    "distilbert-base-uncased-finetuned-sst-2-english",
    "gpt2",
    "facebook/bart-large-cnn",
];

pub const TASKS: &[&str] = &[
    "sentiment-analysis",
    "text-generation",
    "summarization",
    "text-classification",
    "question-answering",
    "translation_en_to_fr",
    "fill-mask",
    "zero-shot-classification",
];

const TASK_SUGGESTIONS: &[(&str, &str)] = &[
    ("distilbert-base-uncased-finetuned-sst-2-english", "sentiment-analysis"),
    ("gpt2", "text-generation"),
    ("facebook/bart-large-cnn", "summarization"),
];

pub fn suggest_task(model: &str) -> Option<&'static str> {
    TASK_SUGGESTIONS
        .iter()
        .find(|(known, _)| *known == model)
        .map(|(_, task)| *task)
}

/// Applies a model selection change to the form.
pub fn select_model(form: &mut RawFormState, model: &str) {
    form.model_selector = model.to_string();

    if model == CUSTOM_MODEL {
        form.custom_model_text.clear();
        return;
    }

    if let Some(task) = suggest_task(model) {
        debug!("Pre-filling task '{}' for model '{}'", task, model);
        form.task_selector = task.to_string();
    }
}

impl RawFormState {
    /// Form as first shown: the default model and its task, everything else blank.
    pub fn initial() -> Self {
        Self {
            model_selector: DEFAULT_MODEL.to_string(),
            task_selector: DEFAULT_TASK.to_string(),
            ..Self::default()
        }
    }
}
