//! Catalog file bookkeeping.
//!
//! The extraction tool writes a text catalog whose charset header is a
//! placeholder. This module fixes that header in place and fans the catalog
//! out into per-language copies for hand translation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WorkflowError, WorkflowResult};

/// Header line emitted by the extraction tool before a charset is chosen.
pub const CHARSET_PLACEHOLDER: &str = "Content-Type: text/plain; charset=CHARSET";

/// Rewrite the placeholder charset header to declare `charset`.
///
/// Reads the whole catalog, replaces the placeholder line with a proper
/// quoted header, trims trailing whitespace from every other line, and
/// writes the result back. Returns the number of lines replaced.
pub fn fix_charset(catalog: &Path, charset: &str) -> WorkflowResult<usize> {
    if !catalog.is_file() {
        return Err(WorkflowError::CatalogMissing(catalog.to_path_buf()));
    }

    let content = fs::read_to_string(catalog)?;

    let mut replaced = 0;
    let mut lines = Vec::new();
    for line in content.lines() {
        if line.contains(CHARSET_PLACEHOLDER) {
            lines.push(format!("\"Content-Type: text/plain; charset={charset}\\n\""));
            replaced += 1;
        } else {
            lines.push(line.trim_end().to_string());
        }
    }

    let mut fixed = lines.join("\n");
    fixed.push('\n');
    fs::write(catalog, fixed)?;

    tracing::debug!(catalog = %catalog.display(), charset, replaced, "fixed charset header");
    Ok(replaced)
}

/// Copy the catalog to `<code>.po` in the same directory.
pub fn copy_for_language(catalog: &Path, code: &str) -> WorkflowResult<PathBuf> {
    if !catalog.is_file() {
        return Err(WorkflowError::CatalogMissing(catalog.to_path_buf()));
    }

    let target = catalog.with_file_name(format!("{code}.po"));
    fs::copy(catalog, &target)?;
    Ok(target)
}
