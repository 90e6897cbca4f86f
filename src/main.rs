use anyhow::Result;
use hf_inference_console::{
    catalog,
    composer::RawFormState,
    config::{self, ProbeKind},
    dispatch::{Dispatcher, ViewState},
};
use serde::Deserialize;
use tracing::info;

/// Field values as written in the form file. `task` falls back to the
/// catalog suggestion for the chosen model.
#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default = "default_model")]
    model: String,
    #[serde(default)]
    custom_model: String,
    #[serde(default)]
    task: Option<String>,
    #[serde(default)]
    inputs: String,
    #[serde(default)]
    pipeline_kwargs: String,
    #[serde(default)]
    probe: Option<ProbeKind>,
}

fn default_model() -> String {
    catalog::DEFAULT_MODEL.to_string()
}

impl FormFile {
    fn into_raw_form(self) -> RawFormState {
        let mut form = RawFormState::initial();
        catalog::select_model(&mut form, &self.model);
        form.custom_model_text = self.custom_model;
        if let Some(task) = self.task {
            form.task_selector = task;
        }
        form.free_text = self.inputs;
        form.extra_params_text = self.pipeline_kwargs;
        form
    }
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

async fn load_form() -> Result<FormFile> {
    let form_path = std::env::var("FORM_PATH").unwrap_or_else(|_| "form.yaml".to_string());
    let form_str = tokio::fs::read_to_string(&form_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read form file '{}': {}", form_path, e))?;
    Ok(serde_yaml::from_str(&form_str)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(&log_level)?,
    };

    // Logs go to stderr so stdout carries only the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        "Inference console targeting {} with log level: {}",
        config.service.predict_url(),
        log_level
    );

    let form = load_form().await?;
    let dispatcher = Dispatcher::from_config(config.service);
    let mut view = ViewState::default();

    if let Some(kind) = form.probe {
        dispatcher.probe(&mut view, kind).await;
        println!("{}", view.output);
        return Ok(());
    }

    let raw = form.into_raw_form();
    if let Err(e) = dispatcher.submit_form(&mut view, &raw).await {
        eprintln!("{}", e.alert());
        println!("{}", view.output);
        std::process::exit(1);
    }

    println!("{}", view.output);
    Ok(())
}
