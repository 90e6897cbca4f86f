use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Rejections produced while composing a request from raw form fields.
///
/// `Display` yields the text written to the output display; [`alert`](Self::alert)
/// yields the message for the blocking prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: Custom model name required.")]
    MissingCustomModel,

    #[error("Error: Input text required.")]
    MissingInput,

    #[error("Error: Invalid JSON in Pipeline Kwargs.")]
    MalformedParameters,
}

impl ValidationError {
    pub fn alert(&self) -> &'static str {
        match self {
            Self::MissingCustomModel => "Please enter a custom model name.",
            Self::MissingInput => "Please enter input text.",
            Self::MalformedParameters => "Invalid JSON in Pipeline Kwargs.",
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
