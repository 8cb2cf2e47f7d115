use connectors::{CompileError, ConfigError};
use filter_syntax::FilterSyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid filter: {}", .0.with_context())]
    Syntax(#[from] FilterSyntaxError),

    #[error("Failed to compile the filter: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
