use super::types::ServiceResponse;
use crate::{
    Result,
    composer::InferenceRequest,
    config::{ProbeKind, ServiceConfig},
};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

/// Carries requests to the inference service.
///
/// An `Err` means no decodable body came back (connection refused, DNS,
/// a proxy answering with HTML, ...). Any JSON body, whatever its status,
/// is an `Ok`.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn predict(&self, request: &InferenceRequest) -> Result<ServiceResponse>;

    async fn probe(&self, kind: ProbeKind) -> Result<ServiceResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    service: ServiceConfig,
}

impl HttpTransport {
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            service,
        }
    }

    async fn send(&self, request_builder: RequestBuilder) -> Result<ServiceResponse> {
        let response = request_builder.send().await?;
        let status = response.status().as_u16();

        debug!("Service answered with status {}", status);

        let body: Value = response.json().await?;
        Ok(ServiceResponse { status, body })
    }
}

#[async_trait]
impl InferenceTransport for HttpTransport {
    async fn predict(&self, request: &InferenceRequest) -> Result<ServiceResponse> {
        let url = self.service.predict_url();
        debug!("POST {}", url);

        self.send(self.client.post(&url).json(request)).await
    }

    async fn probe(&self, kind: ProbeKind) -> Result<ServiceResponse> {
        let url = self.service.probe_url(kind);
        debug!("GET {}", url);

        self.send(self.client.get(&url)).await
    }
}
