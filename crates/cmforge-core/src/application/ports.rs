//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `cmforge-adapters` crate provides implementations.

use crate::error::ForgeResult;
use std::path::Path;

/// Port for console interaction.
///
/// Implemented by:
/// - `cmforge_adapters::console::StdConsole` (production)
/// - `cmforge_adapters::console::ScriptedConsole` (testing)
///
/// ## Design Notes
///
/// - `prompt` writes without a trailing newline so the cursor stays on the
///   prompt line; implementations must flush.
/// - `read_line` returns the line without its trailing newline. End of
///   input surfaces as `ApplicationError::InputClosed` - the prompt loop
///   has no other way to terminate on bad input.
pub trait Console {
    /// Display a prompt, leaving the cursor on the same line.
    fn prompt(&self, text: &str) -> ForgeResult<()>;

    /// Read one line of input, trailing newline stripped.
    fn read_line(&self) -> ForgeResult<String>;

    /// Write a full line of output.
    fn write_line(&self, text: &str) -> ForgeResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cmforge_adapters::filesystem::LocalFilesystem` (production)
/// - `cmforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}
