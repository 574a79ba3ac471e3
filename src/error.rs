//! Error types for dbinspect
//!
//! Uses `thiserror` for library errors. Failures of a single value never
//! surface here: they degrade one row of the tree or the property sheet.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::GatewayError;

/// Result type alias for dbinspect operations
pub type InspectResult<T> = Result<T, InspectError>;

/// Main error type for dbinspect operations
#[derive(Error, Debug)]
pub enum InspectError {
    /// The store failed a whole operation (open or commit)
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON store document
    #[error("invalid store document: {0}")]
    Document(#[from] serde_json::Error),

    /// No node at the given tree path
    #[error("no node at path {path}")]
    NodeNotFound { path: String },

    /// Session already closed
    #[error("session is closed")]
    SessionClosed,

    /// Activated a property that cannot be drilled into
    #[error("property '{name}' is not navigable")]
    NotNavigable { name: String },
}
