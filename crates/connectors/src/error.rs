use filter_syntax::FilterSyntaxError;
use std::path::PathBuf;
use thiserror::Error;

pub use filter_syntax::BuildError;

/// Errors raised while turning a filter string into a backend filter.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The filter string itself is malformed. Callers usually fall back to
    /// scanning without a filter.
    #[error("Filter syntax error: {0}")]
    Syntax(#[from] FilterSyntaxError),

    /// The pruned tree could not be expressed by the backend builder.
    #[error("Filter build error: {0}")]
    Build(#[from] BuildError),
}

impl CompileError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, CompileError::Syntax(_))
    }
}

/// Errors raised when loading capability profiles or column definitions.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A profile was well-formed but cannot be used as given.
    #[error("Invalid capabilities: {0}")]
    InvalidCapabilities(String),

    #[error("Invalid wide-column name '{0}', expected 'family:qualifier' or 'recordkey'")]
    InvalidColumnName(String),
}
