// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TallyError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Counter '{name}' cannot be incremented past {limit}")]
    CountOverflow { name: String, limit: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),

    #[error("Failed to write output: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TallyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TallyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TallyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
