//! The project configuration record.
//!
//! A [`ProjectConfig`] is built exactly once per run (by the prompt service,
//! from defaults overridden by validated user responses) and is read-only
//! from then on. Every field except the project name, the CMake minimum
//! version, and the Qt flag is a compile-time constant of the tool.

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::validation::{is_valid_project_name, is_valid_version};

/// Version stamped into the generated `project()` declaration.
pub const PROJECT_VERSION: &str = "1.0";

/// Project name used when the user keeps the default.
pub const DEFAULT_PROJECT_NAME: &str = "NoName";

/// Minimum CMake version used when the user keeps the default.
pub const DEFAULT_CMAKE_MIN_VERSION: &str = "3.14";

/// Name of the generated source subdirectory.
pub const SOURCE_DIR: &str = "src";

/// Name of the generated test subdirectory.
pub const TESTS_DIR: &str = "test";

/// The two test-case stubs, in generation order.
pub const TEST_CASE_NAMES: [&str; 2] = ["test_case1", "test_case2"];

/// Immutable configuration driving template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    project_name: String,
    cmake_min_version: String,
    using_qt: bool,
}

impl ProjectConfig {
    /// Construct a validated config.
    ///
    /// The same predicates the prompt loop applies are re-applied here, so a
    /// config can never hold a malformed name or version regardless of how
    /// it is constructed.
    pub fn new(
        project_name: impl Into<String>,
        cmake_min_version: impl Into<String>,
        using_qt: bool,
    ) -> Result<Self, DomainError> {
        let project_name = project_name.into();
        let cmake_min_version = cmake_min_version.into();

        if !is_valid_project_name(&project_name) {
            return Err(DomainError::InvalidProjectName {
                value: project_name,
                reason: "must be non-empty and contain no whitespace".into(),
            });
        }
        if !is_valid_version(&cmake_min_version) {
            return Err(DomainError::InvalidVersion {
                value: cmake_min_version,
            });
        }

        Ok(Self {
            project_name,
            cmake_min_version,
            using_qt,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Fixed project version, not user-settable.
    pub const fn project_version(&self) -> &'static str {
        PROJECT_VERSION
    }

    pub fn cmake_min_version(&self) -> &str {
        &self.cmake_min_version
    }

    pub const fn source_dir(&self) -> &'static str {
        SOURCE_DIR
    }

    pub const fn tests_dir(&self) -> &'static str {
        TESTS_DIR
    }

    pub const fn test_case_names(&self) -> [&'static str; 2] {
        TEST_CASE_NAMES
    }

    pub const fn using_qt(&self) -> bool {
        self.using_qt
    }

    /// Name of the generated test sub-project.
    pub fn test_project_name(&self) -> String {
        format!("{}_test", self.project_name)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            cmake_min_version: DEFAULT_CMAKE_MIN_VERSION.to_string(),
            using_qt: false,
        }
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (cmake >= {}, qt: {})",
            self.project_name, self.cmake_min_version, self.using_qt
        )
    }
}
