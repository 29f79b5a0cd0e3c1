//! # Poflow
//!
//! Interactive gettext workflow helper - walk a GUI definition file through
//! string extraction, per-language catalogs, and compiled binary catalogs.
//!
//! Poflow does not reimplement gettext. Extraction and compilation are
//! delegated to the `xgettext` and `msgfmt` tools; what Poflow adds is the
//! bookkeeping between the two: fixing the charset header, keeping the
//! language registry and per-language copies in lockstep, and laying out the
//! `locale/<code>/LC_MESSAGES/<domain>.mo` tree.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install poflow
//!
//! # Run the wizard in the project directory
//! poflow
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod tools;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use error::{WorkflowError, WorkflowResult};
pub use prompt::Prompter;
pub use registry::LanguageRegistry;
pub use tools::{CatalogTools, GettextTools, ToolOutcome};
pub use workflow::{Stage, WorkflowDriver, WorkflowSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "poflow";
