use std::sync::Arc;

use crate::adapters::toml_config::ClientConfig;
use crate::adapters::{ReqwestTransport, TracingLogAdapter};
use crate::app::{
    download_interactor::DownloadInteractor, form_interactor::FormController,
    health_interactor::HealthInteractor,
};
use crate::domain::model::Mode;
use crate::error::CortesResult;
use crate::ports::{LogPort, TransportPort};

pub trait AppContainer: Send + Sync {
    fn form_controller(&self, mode: Mode) -> FormController;
    fn health_interactor(&self) -> HealthInteractor;
    fn download_interactor(&self) -> DownloadInteractor;
}

pub struct DefaultAppContainer {
    transport: Arc<dyn TransportPort>,
    backend_url: String,
}

impl DefaultAppContainer {
    pub fn new(config: &ClientConfig) -> CortesResult<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(transport, config))
    }

    /// Build around an existing transport
    pub fn with_transport(transport: Arc<dyn TransportPort>, config: &ClientConfig) -> Self {
        Self {
            transport,
            backend_url: config.backend_url.clone(),
        }
    }

    fn log_port(component: &'static str) -> Arc<dyn LogPort> {
        Arc::new(TracingLogAdapter::new(component))
    }
}

impl AppContainer for DefaultAppContainer {
    fn form_controller(&self, mode: Mode) -> FormController {
        FormController::new(
            Arc::clone(&self.transport),
            Self::log_port("form"),
            self.backend_url.clone(),
            mode,
        )
    }

    fn health_interactor(&self) -> HealthInteractor {
        HealthInteractor::new(
            Arc::clone(&self.transport),
            Self::log_port("health"),
            self.backend_url.clone(),
        )
    }

    fn download_interactor(&self) -> DownloadInteractor {
        DownloadInteractor::new(Arc::clone(&self.transport), Self::log_port("download"))
    }
}
