//! Terminal seam for the interactive overwrite prompt.

use std::io::{self, IsTerminal, Write};

/// Access to the controlling terminal, if any.
///
/// The prechecker asks exactly one yes/no question through this trait;
/// abstracting it keeps the overwrite protocol testable with a scripted
/// console instead of a real TTY.
pub trait Console {
    /// Whether a controlling terminal is attached.
    fn is_interactive(&self) -> bool;

    /// Print `question` and block until one line of input is available.
    fn prompt(&self, question: &str) -> io::Result<String>;
}

/// [`Console`] backed by the process's stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }

    fn prompt(&self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(answer)
    }
}
