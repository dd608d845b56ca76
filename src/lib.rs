//! Cortes clip generator library
//!
//! Form controller for a video clip generation backend: input validation,
//! request building, reply interpretation and clip card rendering, with the
//! HTTP transport behind a port so the whole flow runs against a mock.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{FormController, SubmitOutcome};
pub use domain::errors::{DomainError, ValidationError};
pub use domain::model::{Clip, Mode, Platform, RawForm, SelectedFile};
pub use error::{CortesError, CortesResult};
pub use output::FormView;
pub use utils::format_time;
