//! The workflow driver.
//!
//! A sequential wizard that walks the user from a raw GUI definition file to
//! compiled binary catalogs. Stages only ever advance; the only way back is
//! to abort at one of the gates, which ends the process.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::Config;
use crate::error::{WorkflowError, WorkflowResult};
use crate::prompt::Prompter;
use crate::registry::LanguageRegistry;
use crate::tools::CatalogTools;

/// Stages of the wizard, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LocateSource,
    Extract,
    FixCharset,
    MetadataGate,
    CollectLanguages,
    EditInstructions,
    TranslationGate,
    VerifyRegistry,
    CollectTarget,
    Compile,
    FinalInstructions,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct WorkflowSummary {
    /// The located source file
    pub source: PathBuf,

    /// Language codes registered this session, in entry order
    pub languages: Vec<String>,

    /// Effective gettext domain
    pub domain: String,

    /// Compiled catalog paths, one per registry code
    pub compiled: Vec<PathBuf>,
}

/// The interactive workflow driver.
///
/// Generic over the prompt streams and the tool seam so the whole wizard can
/// run in-process against scripted input.
pub struct WorkflowDriver<'a, R, W, T> {
    config: &'a Config,
    workdir: PathBuf,
    prompter: Prompter<R, W>,
    tools: T,
}

impl<'a, R: BufRead, W: Write, T: CatalogTools> WorkflowDriver<'a, R, W, T> {
    /// Create a driver rooted at `workdir`.
    pub fn new(config: &'a Config, workdir: &Path, prompter: Prompter<R, W>, tools: T) -> Self {
        Self { config, workdir: workdir.to_path_buf(), prompter, tools }
    }

    /// Run the wizard from start to finish.
    ///
    /// Returns [`WorkflowError::Aborted`] whenever the user declines a
    /// retry or confirmation gate.
    pub fn run(mut self) -> WorkflowResult<WorkflowSummary> {
        self.prompter.say(&format!(
            "--- Helper for translating a .{} file ---",
            self.config.source_extension
        ))?;
        self.prompter.say("")?;

        let source = self.locate_source()?;
        self.extract(&source)?;
        self.fix_charset()?;
        self.metadata_gate()?;
        let languages = self.collect_languages()?;
        self.edit_instructions()?;
        self.translation_gate()?;
        let registry = self.verify_registry()?;
        let (domain, subdir) = self.collect_target()?;
        let compiled = self.compile(&registry, &domain, &subdir)?;
        self.final_instructions(&domain, &subdir)?;

        Ok(WorkflowSummary { source, languages, domain, compiled })
    }

    fn enter(&self, stage: Stage) {
        tracing::debug!(?stage, "entering stage");
    }

    fn catalog_path(&self) -> PathBuf {
        self.workdir.join(&self.config.catalog_file)
    }

    fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::new(self.workdir.join(&self.config.registry_file))
    }

    /// Ask for the source file until it exists and has the right extension.
    fn locate_source(&mut self) -> WorkflowResult<PathBuf> {
        self.enter(Stage::LocateSource);
        let ext = self.config.source_extension.clone();

        loop {
            let answer = self.prompter.ask(&format!("Where is the {ext} file? "))?;
            let expanded = shellexpand::tilde(&answer).into_owned();
            let path = PathBuf::from(expanded);
            let path = if path.is_relative() { self.workdir.join(path) } else { path };

            if path.is_file() && has_extension(&path, &ext) {
                tracing::debug!(source = %path.display(), "located source file");
                return Ok(path);
            }

            if !self.prompter.confirm(&format!("That's not a .{ext} file! Try again? (y/n)> "))? {
                return Err(WorkflowError::Aborted);
            }
        }
    }

    /// Run the extraction tool against the source file.
    fn extract(&mut self, source: &Path) -> WorkflowResult<()> {
        self.enter(Stage::Extract);

        let outcome = self.tools.extract(&self.workdir, source, &self.config.catalog_file)?;
        if !outcome.success {
            tracing::warn!(code = ?outcome.code, "extraction tool reported failure");
        }

        self.prompter.say(&format!("Created a {} file!", self.config.catalog_file))?;
        Ok(())
    }

    /// Replace the placeholder charset header with a real one.
    fn fix_charset(&mut self) -> WorkflowResult<()> {
        self.enter(Stage::FixCharset);

        let charset = self.prompter.ask("\nWhat is the charset? ")?;
        let catalog = self.catalog_path();
        let replaced = catalog::fix_charset(&catalog, &charset)?;
        if replaced == 0 {
            tracing::warn!(catalog = %catalog.display(), "no charset placeholder found");
        }
        Ok(())
    }

    fn metadata_gate(&mut self) -> WorkflowResult<()> {
        self.enter(Stage::MetadataGate);
        self.prompter.say(&format!(
            "\nYou may now want to fill out the meta fields in the {} file before I copy it to the single language files!",
            self.config.catalog_file
        ))?;
        self.gate()
    }

    /// Collect language codes and fan the catalog out, one copy per code.
    ///
    /// Registry line and catalog copy are created together so the two can
    /// never drift apart.
    fn collect_languages(&mut self) -> WorkflowResult<Vec<String>> {
        self.enter(Stage::CollectLanguages);
        self.prompter.say(
            "\nWhich languages do you want to translate? Leave the code empty or type 'stop' to finish!",
        )?;

        let registry = self.registry();
        let catalog = self.catalog_path();
        let mut codes = Vec::new();

        loop {
            let code = self.prompter.ask("Code: ")?;
            if code.is_empty() || code.eq_ignore_ascii_case("stop") {
                break;
            }

            registry.append(&code)?;
            let copy = catalog::copy_for_language(&catalog, &code)?;
            tracing::debug!(code = code.as_str(), copy = %copy.display(), "registered language");
            codes.push(code);
        }

        Ok(codes)
    }

    /// Show the expected per-entry format for hand translation.
    fn edit_instructions(&mut self) -> WorkflowResult<()> {
        self.enter(Stage::EditInstructions);
        let p = &mut self.prompter;
        p.say("\nNow go into the created files and fill the msgstr field with the correct translation!")?;
        p.say("Example: ")?;
        p.say("msgctxt \"...\"")?;
        p.say("msgid \"...\"")?;
        p.say("msgstr \"TRANSLATION\"")?;
        p.say("")?;
        p.say("msgctxt \"...\"")?;
        p.say("msgid \"...\"")?;
        p.say("msgstr \"\"")?;
        p.say("\"TRANSLATION\"")?;
        p.say("\"TRANSLATION\"")?;
        p.say("\nAfter that come back!")?;
        Ok(())
    }

    fn translation_gate(&mut self) -> WorkflowResult<()> {
        self.enter(Stage::TranslationGate);
        self.gate()
    }

    /// Block until the registry exists and is non-empty, or the user gives up.
    fn verify_registry(&mut self) -> WorkflowResult<LanguageRegistry> {
        self.enter(Stage::VerifyRegistry);
        let registry = self.registry();

        while !registry.is_ready() {
            self.prompter.say(&format!(
                "Did you provide some language codes? There is no usable {} file!",
                self.config.registry_file
            ))?;
            if !self.prompter.confirm("Retry? (y/n)> ")? {
                self.prompter.say("No problem!")?;
                return Err(WorkflowError::Aborted);
            }
        }

        Ok(registry)
    }

    /// Ask for the gettext domain and the optional locale subdirectory.
    fn collect_target(&mut self) -> WorkflowResult<(String, String)> {
        self.enter(Stage::CollectTarget);

        let domain = self.prompter.ask("\nWhat is your preferred gettext domain name? ")?;
        let domain =
            if domain.is_empty() { self.config.default_domain.clone() } else { domain };

        let subdir = self.prompter.ask(
            "\nDo you want to use a special subdirectory in the locale dir? If yes type a name: ",
        )?;
        let subdir = if subdir.is_empty() { String::new() } else { format!("{subdir}/") };

        Ok((domain, subdir))
    }

    /// Compile every registered language into the locale tree.
    fn compile(
        &mut self,
        registry: &LanguageRegistry,
        domain: &str,
        subdir: &str,
    ) -> WorkflowResult<Vec<PathBuf>> {
        self.enter(Stage::Compile);
        let mut compiled = Vec::new();

        for code in registry.codes()? {
            let dir = self
                .workdir
                .join(&self.config.locale_dir)
                .join(format!("{subdir}{code}"))
                .join("LC_MESSAGES");
            fs::create_dir_all(&dir)?;

            let po = self.workdir.join(format!("{code}.po"));
            let mo = dir.join(format!("{domain}.mo"));

            let outcome = self.tools.compile(&self.workdir, &po, &mo)?;
            if !outcome.success {
                tracing::warn!(code = code.as_str(), exit = ?outcome.code, "compilation tool reported failure");
            }

            compiled.push(mo);
        }

        Ok(compiled)
    }

    /// Show how a consuming application binds the compiled catalogs.
    fn final_instructions(&mut self, domain: &str, subdir: &str) -> WorkflowResult<()> {
        self.enter(Stage::FinalInstructions);
        let locale_dir = self.config.locale_dir.clone();
        let ext = self.config.source_extension.clone();
        let p = &mut self.prompter;

        p.say(&format!("\nThe compiled files are now in the {locale_dir} directory."))?;
        p.say("You need to insert these lines at the beginning of the file:\n")?;
        p.say("const Me = imports.misc.extensionUtils.getCurrentExtension();")?;
        p.say("const Gettext = imports.gettext;")?;
        p.say(&format!("Gettext.textdomain('{domain}');"))?;
        p.say(&format!(
            "Gettext.bindtextdomain('{domain}', Me.path + \"/{locale_dir}/{subdir}\");\n"
        ))?;
        p.say(&format!("Now you can use the {ext} file for the gui:\n"))?;
        p.say("let builder = new Gtk.Builder();")?;
        p.say("builder.add_from_file(GLADE_PATH)")?;
        p.say("let element = builder.get_object('ELEMENT_NAME');")?;
        p.say("element.show_all();")?;
        Ok(())
    }

    /// Continue-or-abort gate shared by the two confirmation stages.
    fn gate(&mut self) -> WorkflowResult<()> {
        if self.prompter.confirm("Continue? (y/n)> ")? {
            Ok(())
        } else {
            self.prompter.say("No problem!")?;
            Err(WorkflowError::Aborted)
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}
