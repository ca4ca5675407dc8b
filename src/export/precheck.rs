//! Overwrite-conflict precheck.
//!
//! Overwriting an existing schema file is the single irreversible action in
//! the system, so it is resolved before the module is even loaded.

use std::io::Write;
use std::path::Path;

use super::console::Console;
use super::error::ExportError;

/// Outcome of the conflict precheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precheck {
    /// No conflict, or the user agreed to overwrite.
    Proceed,
    /// The user declined, or no terminal was attached to ask.
    Declined,
}

/// Check whether writing `file_name` into `out_dir` would clobber an
/// existing file, and if so ask the user for consent.
///
/// Non-interactive processes always decline: a refusal is final for the
/// run, with no retry.
pub fn check_default_conflict(
    out_dir: &Path,
    file_name: &str,
    console: &dyn Console,
    sink: &mut dyn Write,
) -> Result<Precheck, ExportError> {
    if !out_dir.join(file_name).exists() {
        return Ok(Precheck::Proceed);
    }

    if !console.is_interactive() {
        writeln!(
            sink,
            "File '{file_name}' already exists. Use interactive mode to overwrite."
        )?;
        return Ok(Precheck::Declined);
    }

    writeln!(
        sink,
        "There is already a file named '{file_name}' in the target location."
    )?;
    let answer = console.prompt("Do you want to overwrite the file [Y/N] ? ")?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(Precheck::Proceed)
    } else {
        writeln!(sink, "Schema generation cancelled by user.")?;
        Ok(Precheck::Declined)
    }
}
