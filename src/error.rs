//! Workflow error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur while driving the translation workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The user declined to continue at a retry or confirmation gate,
    /// or the input stream ended mid-wizard.
    #[error("aborted by user")]
    Aborted,

    /// The catalog file was missing when a stage needed it.
    #[error("catalog file not found: {0}")]
    CatalogMissing(PathBuf),

    /// An external tool could not be spawned.
    #[error("failed to run '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
