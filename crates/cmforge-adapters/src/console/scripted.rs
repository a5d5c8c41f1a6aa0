//! Scripted console adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
};

use cmforge_core::{
    application::{ApplicationError, ports::Console},
    error::ForgeResult,
};

/// A console that replays queued input lines and records all output.
///
/// This is the swappable input source the prompt loop is written against:
/// tests queue answers up front and assert on what was printed afterwards.
/// Reading past the end of the script behaves like EOF on stdin.
#[derive(Debug, Clone)]
pub struct ScriptedConsole {
    inner: Arc<RwLock<ScriptedConsoleInner>>,
}

#[derive(Debug, Default)]
struct ScriptedConsoleInner {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console with the given input lines queued.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScriptedConsoleInner {
                input: lines.into_iter().map(Into::into).collect(),
                output: Vec::new(),
            })),
        }
    }

    /// Create a console with no input at all (every read is EOF).
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Everything written so far, prompts included (testing helper).
    pub fn output(&self) -> Vec<String> {
        self.inner.read().unwrap().output.clone()
    }

    /// Number of queued input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.inner.read().unwrap().input.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&self, text: &str) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.output.push(text.to_string());
        Ok(())
    }

    fn read_line(&self) -> ForgeResult<String> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner
            .input
            .pop_front()
            .ok_or_else(|| ApplicationError::InputClosed.into())
    }

    fn write_line(&self, text: &str) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.output.push(format!("{text}\n"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_input_in_order() {
        let console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "second");
    }

    #[test]
    fn exhausted_input_is_eof() {
        let console = ScriptedConsole::empty();
        assert!(console.read_line().is_err());
    }

    #[test]
    fn records_prompts_and_lines() {
        let console = ScriptedConsole::empty();
        console.prompt("Name: ").unwrap();
        console.write_line("error").unwrap();
        assert_eq!(console.output(), vec!["Name: ".to_string(), "error\n".to_string()]);
    }
}
