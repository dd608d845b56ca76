// Domain errors - Error types for the domain layer

use std::fmt;

/// A rejected form field. Display yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Clip count missing, non-numeric or outside 1..=20
    ClipsCount,
    /// Max duration missing, non-numeric or below 5 seconds
    MaxDuration,
    /// Video URL empty or not starting with "http"
    VideoUrl,
    /// Upload mode without a selected file
    MissingFile,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ClipsCount => {
                write!(f, "Informe uma quantidade de cortes entre 1 e 20.")
            }
            ValidationError::MaxDuration => {
                write!(f, "A duração máxima deve ser de pelo menos 5 segundos.")
            }
            ValidationError::VideoUrl => {
                write!(f, "Informe uma URL de vídeo válida (começando com http).")
            }
            ValidationError::MissingFile => write!(f, "Selecione um arquivo de vídeo para enviar."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Form rejected before any request was built
    Validation(ValidationError),
    /// Request never completed (connection refused, DNS, TLS, ...)
    Transport(String),
    /// Backend answered, but with a failure or an unreadable body
    Backend { status: u16, message: String },
    /// A submission is already in flight
    Busy,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::Validation(err) => write!(f, "{}", err),
            DomainError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DomainError::Backend { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            DomainError::Busy => write!(f, "A submission is already in progress"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err)
    }
}
