//! Standard input/output console adapter.

use std::io::{self, BufRead, Write};

use cmforge_core::{
    application::{ApplicationError, ports::Console},
    error::ForgeResult,
};

/// Production console implementation over stdin/stdout.
#[derive(Debug, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new stdio console adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&self, text: &str) -> ForgeResult<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| map_console_error(e, "write prompt"))
    }

    fn read_line(&self) -> ForgeResult<String> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| map_console_error(e, "read input"))?;

        // Zero bytes read means EOF; an empty *line* still carries '\n'.
        if read == 0 {
            return Err(ApplicationError::InputClosed.into());
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&self, text: &str) -> ForgeResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|e| map_console_error(e, "write line"))
    }
}

fn map_console_error(e: io::Error, operation: &str) -> cmforge_core::error::ForgeError {
    ApplicationError::ConsoleError {
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
