//! Core domain layer for cmforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (console, filesystem) are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No I/O crates**: Only std, thiserror, and serde derives
//! - **Immutable entities**: `ProjectConfig` is constructed once and only read
//! - **Pure rendering**: the cmake composers are total functions of the config

pub mod cmake;
pub mod config;
pub mod error;
pub mod project_structure;
pub mod validation;

// Re-exports for convenience
pub use config::{
    DEFAULT_CMAKE_MIN_VERSION, DEFAULT_PROJECT_NAME, PROJECT_VERSION, ProjectConfig, SOURCE_DIR,
    TEST_CASE_NAMES, TESTS_DIR,
};
pub use error::{DomainError, ErrorCategory};
pub use project_structure::{FileToWrite, FsEntry, ProjectStructure};
pub use validation::{Answer, is_valid_project_name, is_valid_version};
