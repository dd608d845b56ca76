// Ports - Interface definitions (contracts)

use crate::domain::errors::*;
use crate::domain::model::*;
use async_trait::async_trait;

/// Port for talking to the clip backend over HTTP
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Send a POST built by the request builder.
    ///
    /// Any completed exchange is `Ok`, whatever its status. `Err` is reserved
    /// for requests that never complete and must be `DomainError::Transport`.
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, DomainError>;

    /// Plain GET, same contract as `send`
    async fn get(&self, url: &str) -> Result<HttpReply, DomainError>;

    /// Fetch a file. Non-2xx replies fail with `DomainError::Backend`.
    async fn download(&self, url: &str) -> Result<Vec<u8>, DomainError>;
}

/// Port for logging and observability
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);
}
