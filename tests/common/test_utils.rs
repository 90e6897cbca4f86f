use hf_inference_console::{
    Result,
    composer::RawFormState,
    config::{Config, LogsConfig, ServiceConfig},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration pointing at `base_url` with no path prefix
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        service: ServiceConfig {
            base_url: base_url.to_string(),
            api_prefix: String::new(),
        },
        logs: LogsConfig {
            level: "debug".to_string(),
        },
    }
}

/// Create a form with one model, one task and the given free text
pub fn create_test_form(model: &str, task: &str, free_text: &str) -> RawFormState {
    RawFormState {
        model_selector: model.to_string(),
        custom_model_text: String::new(),
        task_selector: task.to_string(),
        free_text: free_text.to_string(),
        extra_params_text: String::new(),
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Body shaped like a successful `/predict` answer
pub fn sample_prediction_body() -> Value {
    json!({
        "model_name": "distilbert-base-uncased-finetuned-sst-2-english",
        "task": "sentiment-analysis",
        "predictions": [{"label": "POSITIVE", "score": 0.9998}],
        "worker_pid": 4242,
        "total_request_time_ms": 12.5,
        "inference_execution_time_ms": 9.75,
        "pipeline_from_lru_cache": true
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
service:
  base_url: "http://inference.local:8000"
  api_prefix: "/api"

logs:
  level: "debug"
"#;

/// Configuration relying on defaults for everything but the log level
pub const PARTIAL_CONFIG_YAML: &str = r#"
logs:
  level: "warn"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
service:
  base_url: ["not", "a", "string"]
"#;
