// Application layer - Use case interactors

pub mod container;
pub mod download_interactor;
pub mod form_interactor;
pub mod health_interactor;

// Re-export interactors
pub use download_interactor::{DownloadInteractor, DownloadResult};
pub use form_interactor::{FormController, SharedView, SubmitOutcome};
pub use health_interactor::HealthInteractor;
