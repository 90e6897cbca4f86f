use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Where the inference service lives. The browser build of this client sat
/// behind a reverse proxy that mounted the service under `/api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Read-only service endpoints besides `predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Info,
    Health,
    Readiness,
    CacheInfo,
}

impl ProbeKind {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Info => "/",
            Self::Health => "/healthz",
            Self::Readiness => "/readiness",
            Self::CacheInfo => "/cache_info",
        }
    }
}

impl ServiceConfig {
    pub fn predict_url(&self) -> String {
        self.endpoint("/predict")
    }

    pub fn probe_url(&self, kind: ProbeKind) -> String {
        self.endpoint(kind.path())
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}{}", base, prefix, path)
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
