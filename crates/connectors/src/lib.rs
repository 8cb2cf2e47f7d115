//! Backend filter builders and the compile pipeline that feeds them.

pub mod capabilities;
pub mod columnar;
pub mod compiler;
pub mod config;
pub mod error;
pub mod sql;
pub mod transform;
pub mod wide_column;

pub use capabilities::{BackendCapabilities, BackendKind};
pub use compiler::FilterCompiler;
pub use error::{BuildError, CompileError, ConfigError};
