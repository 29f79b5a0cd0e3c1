//! External tool invocation.
//!
//! Extraction and compilation are delegated to the standard gettext tools.
//! Their stdio is passed through to the terminal so the user sees tool
//! output directly; exit statuses are reported back to the driver, which
//! decides what to do with a failure.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::config::Config;
use crate::error::{WorkflowError, WorkflowResult};

/// Outcome of one external tool run.
#[derive(Debug, Clone, Copy)]
pub struct ToolOutcome {
    /// Whether the tool exited with status 0
    pub success: bool,

    /// Exit code, if the tool exited normally
    pub code: Option<i32>,
}

impl From<ExitStatus> for ToolOutcome {
    fn from(status: ExitStatus) -> Self {
        Self { success: status.success(), code: status.code() }
    }
}

/// Seam between the workflow and the external gettext tools.
///
/// The driver only ever talks to this trait; tests substitute an
/// implementation that fabricates catalog files instead of spawning
/// processes.
pub trait CatalogTools {
    /// Extract translatable strings from `source` into the catalog file
    /// named `catalog` under `workdir`.
    fn extract(&self, workdir: &Path, source: &Path, catalog: &str) -> WorkflowResult<ToolOutcome>;

    /// Compile the text catalog `po` into the binary catalog `mo`.
    fn compile(&self, workdir: &Path, po: &Path, mo: &Path) -> WorkflowResult<ToolOutcome>;
}

/// The real gettext tool chain (`xgettext` / `msgfmt`).
#[derive(Debug, Clone)]
pub struct GettextTools {
    xgettext: String,
    msgfmt: String,
    language: String,
}

impl GettextTools {
    /// Tool chain as named by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            xgettext: config.xgettext_bin.clone(),
            msgfmt: config.msgfmt_bin.clone(),
            language: config.extract_language.clone(),
        }
    }
}

impl CatalogTools for GettextTools {
    fn extract(&self, workdir: &Path, source: &Path, catalog: &str) -> WorkflowResult<ToolOutcome> {
        tracing::info!(tool = self.xgettext.as_str(), source = %source.display(), "extracting messages");

        let mut cmd = Command::new(&self.xgettext);
        cmd.arg("-L").arg(&self.language).arg("-o").arg(catalog).arg(source).current_dir(workdir);
        run(&self.xgettext, &mut cmd)
    }

    fn compile(&self, workdir: &Path, po: &Path, mo: &Path) -> WorkflowResult<ToolOutcome> {
        tracing::info!(tool = self.msgfmt.as_str(), po = %po.display(), mo = %mo.display(), "compiling catalog");

        let mut cmd = Command::new(&self.msgfmt);
        cmd.arg(po).arg("-o").arg(mo).current_dir(workdir);
        run(&self.msgfmt, &mut cmd)
    }
}

/// Run a configured tool with inherited stdio and wait for it.
fn run(tool: &str, cmd: &mut Command) -> WorkflowResult<ToolOutcome> {
    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| WorkflowError::ToolSpawn { tool: tool.to_string(), source })?;

    Ok(ToolOutcome::from(status))
}
