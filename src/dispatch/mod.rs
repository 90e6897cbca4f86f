//! Sends composed requests and renders whatever comes back into a [`ViewState`].
//!
//! Every call follows the same protocol: mark the view busy with a loading
//! placeholder, await exactly one response or failure, write the rendered
//! text, then clear the busy flag. Clearing happens in a drop guard so the
//! flag also comes down if the future is dropped mid-flight.
//!
//! Submissions borrow the view mutably, so a second submission on the same
//! view cannot start until the first one settles.

mod client;
pub mod render;
mod types;

pub use client::*;
pub use types::*;

use crate::{
    Result,
    composer::{InferenceRequest, RawFormState, compose},
    config::{ProbeKind, ServiceConfig},
    error::ValidationError,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub struct Dispatcher {
    transport: Box<dyn InferenceTransport>,
}

impl Dispatcher {
    pub fn new(transport: impl InferenceTransport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    pub fn from_config(service: ServiceConfig) -> Self {
        Self::new(HttpTransport::new(service))
    }

    /// Composes `raw` and submits it. Validation failures are written to the
    /// view without raising the busy flag and handed back so the caller can
    /// show its alert.
    pub async fn submit_form(
        &self,
        view: &mut ViewState,
        raw: &RawFormState,
    ) -> std::result::Result<(), ValidationError> {
        match compose(raw) {
            Ok(request) => {
                self.submit(view, request).await;
                Ok(())
            }
            Err(e) => {
                warn!("Form rejected before dispatch: {:?}", e);
                view.output = e.to_string();
                Err(e)
            }
        }
    }

    pub async fn submit(&self, view: &mut ViewState, request: InferenceRequest) {
        let submission_id = Uuid::new_v4();
        info!(
            "[{}] Submitting {} input(s) to model '{}' for task '{}'",
            submission_id,
            request.inputs.len(),
            request.model_name,
            request.task
        );

        let mut guard = BusyGuard::engage(view);
        let started = Instant::now();
        let outcome = self.transport.predict(&request).await;
        guard.show(settle(submission_id, started, outcome));
    }

    /// Queries one of the service's read-only endpoints with the same
    /// busy/render protocol as [`submit`](Self::submit).
    pub async fn probe(&self, view: &mut ViewState, kind: ProbeKind) {
        let submission_id = Uuid::new_v4();
        info!("[{}] Probing service endpoint {}", submission_id, kind.path());

        let mut guard = BusyGuard::engage(view);
        let started = Instant::now();
        let outcome = self.transport.probe(kind).await;
        guard.show(settle(submission_id, started, outcome));
    }
}

fn settle(submission_id: Uuid, started: Instant, outcome: Result<ServiceResponse>) -> String {
    let elapsed_ms = started.elapsed().as_millis();

    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            error!(
                "[{}] Fetch error after {}ms: {}",
                submission_id, elapsed_ms, e
            );
            return render::render_transport_failure(&e);
        }
    };

    let result = InferenceResult::from_response(response);
    match &result {
        InferenceResult::Success(body) => {
            info!("[{}] Succeeded in {}ms", submission_id, elapsed_ms);
            if let Some(envelope) = PredictionEnvelope::from_body(body) {
                debug!(
                    "[{}] Service timings: total={:?}ms inference={:?}ms cached_pipeline={:?} worker={:?}",
                    submission_id,
                    envelope.total_request_time_ms,
                    envelope.inference_execution_time_ms,
                    envelope.pipeline_from_lru_cache,
                    envelope.worker_pid
                );
            }
        }
        InferenceResult::Failure { status, detail } => {
            warn!(
                "[{}] Service returned {} after {}ms: {}",
                submission_id, status, elapsed_ms, detail
            );
        }
    }

    render::render_result(&result)
}

struct BusyGuard<'a> {
    view: &'a mut ViewState,
}

impl<'a> BusyGuard<'a> {
    fn engage(view: &'a mut ViewState) -> Self {
        view.busy = true;
        view.output = render::LOADING.to_string();
        Self { view }
    }

    fn show(&mut self, output: String) {
        self.view.output = output;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.view.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_sets_placeholder_and_clears_on_drop() {
        let mut view = ViewState::default();
        {
            let guard = BusyGuard::engage(&mut view);
            assert!(guard.view.busy);
            assert_eq!(guard.view.output, "Loading...");
        }
        assert!(!view.busy);
        assert_eq!(view.output, "Loading...");
    }

    #[test]
    fn test_busy_guard_clears_on_panic() {
        let mut view = ViewState::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = BusyGuard::engage(&mut view);
            panic!("render blew up");
        }));

        assert!(result.is_err());
        assert!(!view.busy);
    }
}
