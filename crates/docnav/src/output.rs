//! Terminal output utilities.
//!
//! Status messages go to stderr with colors; command results go to stdout
//! uncolored so they can be piped.

use console::{Style, Term};
use serde::Serialize;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

/// Write a line of command output to stdout.
pub(crate) fn print_line(line: &str) -> std::io::Result<()> {
    Term::stdout().write_line(line)
}

/// Write a value to stdout as pretty-printed JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), crate::error::CliError> {
    print_line(&serde_json::to_string_pretty(value)?)?;
    Ok(())
}
