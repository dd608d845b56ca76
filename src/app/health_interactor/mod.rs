// Health interactor - Checks that the backend is up and what it can do

use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Interactor for the backend health check
pub struct HealthInteractor {
    transport: Arc<dyn TransportPort>,
    log_port: Arc<dyn LogPort>,
    backend_url: String,
}

impl HealthInteractor {
    /// Create new health interactor with injected ports
    pub fn new(
        transport: Arc<dyn TransportPort>,
        log_port: Arc<dyn LogPort>,
        backend_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            log_port,
            backend_url: backend_url.into(),
        }
    }

    /// Query `/api/health`.
    ///
    /// Failures carry the same user-facing messages as a form submission.
    pub async fn check(&self) -> Result<HealthReport, DomainError> {
        let url = format!("{}{}", normalize_origin(&self.backend_url), HEALTH_ENDPOINT);
        self.log_port.debug(&format!("Checking {}", url)).await;

        let reply = match self.transport.get(&url).await {
            Ok(reply) => reply,
            Err(err) => {
                self.log_port
                    .error(&format!("Health check failed: {}", err))
                    .await;
                return Err(DomainError::Transport(connectivity_message(
                    &self.backend_url,
                )));
            }
        };

        if !reply.is_success() {
            return Err(DomainError::Backend {
                status: reply.status,
                message: ResponseInterpreter::failure_text(&reply),
            });
        }

        let report: HealthReport =
            serde_json::from_str(&reply.body).map_err(|_| DomainError::Backend {
                status: reply.status,
                message: ResponseInterpreter::status_message(reply.status),
            })?;

        if !report.ffmpeg {
            self.log_port.warn("Backend reports FFmpeg unavailable").await;
        }
        self.log_port
            .info(&format!("Backend status: {}", report.status))
            .await;
        Ok(report)
    }
}
