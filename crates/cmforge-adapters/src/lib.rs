//! Infrastructure adapters for cmforge.
//!
//! This crate implements the ports defined in `cmforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod console;
pub mod filesystem;

// Re-export commonly used adapters
pub use console::{ScriptedConsole, StdConsole};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
