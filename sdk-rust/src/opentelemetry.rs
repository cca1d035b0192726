use crate::{client_utils::JsonResponse, SaamError, SaamResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct RequestSpan {
    span: Span,
    start_time: Instant,
    status_code: Option<u16>,
    ended: bool,
}

impl RequestSpan {
    pub fn new(operation: &str, url: &str) -> Self {
        let span = info_span!("saam_sdk.request");
        span.set_attribute("saam.operation", operation.to_string());
        span.set_attribute("http.request.method", "GET");
        span.set_attribute("url.full", url.to_string());

        Self {
            span,
            start_time: Instant::now(),
            status_code: None,
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    /// Record the outcome of the request and unwrap the body.
    pub fn on_result<T>(&mut self, result: SaamResult<JsonResponse<T>>) -> SaamResult<T> {
        match result {
            Ok(JsonResponse { status, body }) => {
                self.status_code = Some(status.as_u16());
                Ok(body)
            }
            Err(error) => {
                self.on_error(&error);
                Err(error)
            }
        }
    }

    fn on_error(&mut self, error: &SaamError) {
        if let SaamError::StatusCode(status, _) = error {
            self.status_code = Some(status.as_u16());
        }
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
        tracing::warn!(parent: &self.span, error = %error, "SAAM request failed");
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(status_code) = self.status_code {
            self.span
                .set_attribute("http.response.status_code", i64::from(status_code));
        }
        self.span
            .set_attribute("saam.duration_seconds", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl Drop for RequestSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

/// Run one API request inside a `saam_sdk.request` span.
pub async fn trace_request<F, Fut, T>(operation: &str, url: &str, f: F) -> SaamResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = SaamResult<JsonResponse<T>>>,
{
    let mut span = RequestSpan::new(operation, url);
    let result = span.instrument_future(f()).await;
    let result = span.on_result(result);

    span.on_end();
    result
}
