//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end, with stub gettext tools
//! standing in for `xgettext` and `msgfmt`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Get the binary to test.
fn poflow() -> Command {
    Command::cargo_bin("poflow").unwrap()
}

/// Install stub `xgettext`/`msgfmt` executables into the fixture and point
/// the local config at them.
///
/// The extraction stub writes a minimal catalog with the placeholder
/// charset header; the compilation stub copies its input to its `-o`
/// target.
#[cfg(unix)]
fn install_stub_tools(temp: &assert_fs::TempDir) {
    use std::os::unix::fs::PermissionsExt;

    let xgettext = temp.child("bin/xgettext");
    xgettext
        .write_str(
            "#!/bin/sh\n\
             cat > messages.po <<'EOF'\n\
             msgid \"\"\n\
             msgstr \"\"\n\
             \"Content-Type: text/plain; charset=CHARSET\\n\"\n\
             \n\
             msgctxt \"greeting\"\n\
             msgid \"Hello\"\n\
             msgstr \"\"\n\
             EOF\n",
        )
        .unwrap();

    let msgfmt = temp.child("bin/msgfmt");
    msgfmt.write_str("#!/bin/sh\ncp \"$1\" \"$3\"\n").unwrap();

    for stub in [&xgettext, &msgfmt] {
        let mut perms = std::fs::metadata(stub.path()).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(stub.path(), perms).unwrap();
    }

    temp.child(".poflow.toml")
        .write_str(&format!(
            "xgettext_bin = \"{}\"\nmsgfmt_bin = \"{}\"\n",
            xgettext.path().display(),
            msgfmt.path().display()
        ))
        .unwrap();
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    poflow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive gettext workflow helper"));
}

#[test]
fn test_short_help_flag() {
    poflow().arg("-h").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    poflow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_subcommand() {
    poflow().arg("invalid-command-that-does-not-exist").assert().failure();
}

#[test]
fn test_invalid_flag() {
    poflow().arg("--invalid-flag-xyz").assert().failure();
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_shows_defaults() {
    let temp = assert_fs::TempDir::new().unwrap();

    poflow()
        .args(["-C", temp.path().to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog_file = \"messages.po\""))
        .stdout(predicate::str::contains("registry_file = \"LANGUAGES\""));

    temp.close().unwrap();
}

#[test]
fn test_config_json_format() {
    let temp = assert_fs::TempDir::new().unwrap();

    poflow()
        .args(["-C", temp.path().to_str().unwrap(), "config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_domain\": \"messages\""));

    temp.close().unwrap();
}

#[test]
fn test_config_path_flag() {
    let temp = assert_fs::TempDir::new().unwrap();

    poflow()
        .args(["-C", temp.path().to_str().unwrap(), "config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".poflow.toml"));

    temp.close().unwrap();
}

#[test]
fn test_config_respects_local_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".poflow.toml").write_str("source_extension = \"ui\"\n").unwrap();

    poflow()
        .args(["-C", temp.path().to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source_extension = \"ui\""));

    temp.close().unwrap();
}

#[test]
fn test_missing_workdir_fails() {
    poflow().args(["-C", "/definitely/not/a/real/dir", "config"]).assert().failure();
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    poflow()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ============================================================================
// Wizard Abort Tests
// ============================================================================

#[test]
fn test_declining_source_retry_exits_with_failure() {
    let temp = assert_fs::TempDir::new().unwrap();

    poflow()
        .current_dir(temp.path())
        .write_stdin("nope.glade\nn\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("That's not a .glade file!"));

    temp.close().unwrap();
}

#[test]
fn test_eof_on_stdin_exits_with_failure() {
    let temp = assert_fs::TempDir::new().unwrap();

    poflow()
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Where is the glade file?"));

    temp.close().unwrap();
}

#[test]
#[cfg(unix)]
fn test_metadata_gate_abort_leaves_no_registry() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ui.glade").write_str("<interface/>").unwrap();
    install_stub_tools(&temp);

    poflow()
        .current_dir(temp.path())
        .write_stdin("ui.glade\nUTF-8\nn\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No problem!"));

    temp.child("LANGUAGES").assert(predicate::path::missing());

    temp.close().unwrap();
}

// ============================================================================
// Wizard End-to-End Tests
// ============================================================================

#[test]
#[cfg(unix)]
fn test_wizard_end_to_end() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ui.glade").write_str("<interface/>").unwrap();
    install_stub_tools(&temp);

    poflow()
        .current_dir(temp.path())
        .write_stdin("ui.glade\nUTF-8\ny\nde\nfr\n\ny\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a messages.po file!"))
        .stdout(predicate::str::contains("The compiled files are now in the locale directory."));

    temp.child("messages.po")
        .assert(predicate::str::contains("charset=UTF-8"))
        .assert(predicate::str::contains("charset=CHARSET").not());
    temp.child("LANGUAGES").assert("de\nfr\n");
    temp.child("de.po").assert(predicate::path::exists());
    temp.child("fr.po").assert(predicate::path::exists());
    temp.child("locale/de/LC_MESSAGES/messages.mo").assert(predicate::path::exists());
    temp.child("locale/fr/LC_MESSAGES/messages.mo").assert(predicate::path::exists());

    temp.close().unwrap();
}

#[test]
#[cfg(unix)]
fn test_wizard_with_domain_and_subdirectory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ui.glade").write_str("<interface/>").unwrap();
    install_stub_tools(&temp);

    poflow()
        .current_dir(temp.path())
        .write_stdin("ui.glade\nUTF-8\ny\nja\n\ny\nmyapp\nextra\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gettext.textdomain('myapp');"));

    temp.child("locale/extra/ja/LC_MESSAGES/myapp.mo").assert(predicate::path::exists());

    temp.close().unwrap();
}

#[test]
#[cfg(unix)]
fn test_wizard_registry_gate_abort() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ui.glade").write_str("<interface/>").unwrap();
    install_stub_tools(&temp);

    // No languages entered; the registry check can only be retried or
    // abandoned.
    poflow()
        .current_dir(temp.path())
        .write_stdin("ui.glade\nUTF-8\ny\n\ny\nn\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("There is no usable LANGUAGES file!"));

    temp.child("locale").assert(predicate::path::missing());

    temp.close().unwrap();
}

#[test]
#[cfg(unix)]
fn test_wizard_honors_configured_extension() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("window.ui").write_str("<interface/>").unwrap();
    install_stub_tools(&temp);

    // Extend the stub config with a different source extension.
    let existing = std::fs::read_to_string(temp.child(".poflow.toml").path()).unwrap();
    temp.child(".poflow.toml")
        .write_str(&format!("{existing}source_extension = \"ui\"\nextract_language = \"GtkBuilder\"\n"))
        .unwrap();

    poflow()
        .current_dir(temp.path())
        .write_stdin("window.ui\nUTF-8\ny\nde\n\ny\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Where is the ui file?"));

    temp.child("locale/de/LC_MESSAGES/messages.mo").assert(predicate::path::exists());

    temp.close().unwrap();
}
