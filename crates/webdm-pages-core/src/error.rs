//! Unified error types for the webdm-pages crates.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading contexts or rendering fragments.
#[derive(Error, Debug)]
pub enum WebdmPagesError {
    // --- Context files ---

    /// The context JSON file was not found.
    #[error("context file not found at {path}")]
    ContextNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The context file exists but is not a valid context document.
    /// Also covers fields of the wrong shape, e.g. a `screenshot_urls`
    /// that is not a list.
    #[error("failed to parse context at {path}")]
    ContextParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Rendering ---

    /// The context violates a renderer precondition. Raised before any
    /// output is produced; a render either returns a complete fragment
    /// or fails with this.
    #[error("invalid context: {reason}")]
    InvalidContext { reason: String },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, WebdmPagesError>`.
pub type Result<T> = std::result::Result<T, WebdmPagesError>;
