//! The language registry.
//!
//! A newline-delimited list of language codes, created lazily when the first
//! code is entered and append-only for the rest of the session. The compile
//! stage iterates it in entry order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::WorkflowResult;

/// Handle on the on-disk language registry.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    path: PathBuf,
}

impl LanguageRegistry {
    /// Registry backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a code, creating the registry on first use.
    pub fn append(&self, code: &str) -> WorkflowResult<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{code}")?;
        Ok(())
    }

    /// All registered codes, in entry order.
    pub fn codes(&self) -> WorkflowResult<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Whether the registry exists and holds at least one code.
    pub fn is_ready(&self) -> bool {
        self.path.is_file() && self.codes().map(|codes| !codes.is_empty()).unwrap_or(false)
    }
}
