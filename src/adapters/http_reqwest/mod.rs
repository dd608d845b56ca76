// HTTP adapter - Backend transport using reqwest

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::error::{CortesError, CortesResult};
use crate::ports::*;

/// reqwest-backed transport. No timeout is set; the client's own behaviour applies.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create new transport with a default client
    pub fn new() -> CortesResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("cortes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CortesError::HttpClient {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// File parts stream from the shared buffer; nothing is copied
    fn multipart_form(fields: &[FormField]) -> Form {
        fields.iter().fold(Form::new(), |form, field| match field {
            FormField::Text { name, value } => form.text(name.clone(), value.clone()),
            FormField::File { name, file } => form.part(
                name.clone(),
                Part::stream(Body::from(file.bytes.clone())).file_name(file.name.clone()),
            ),
        })
    }

    async fn into_reply(response: reqwest::Response) -> Result<HttpReply, DomainError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Backend replied {} ({} bytes)", status, body.len());
        Ok(HttpReply { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}

#[async_trait]
impl TransportPort for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpReply, DomainError> {
        debug!("POST {}", request.url);
        let builder = self.client.post(&request.url);
        let builder = match &request.body {
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => builder.multipart(Self::multipart_form(fields)),
        };

        let response = builder.send().await.map_err(transport_error)?;
        Self::into_reply(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpReply, DomainError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        Self::into_reply(response).await
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, DomainError> {
        debug!("GET {} (download)", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Backend {
                status: status.as_u16(),
                message: format!("download failed with HTTP {}", status.as_u16()),
            });
        }
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }
}
