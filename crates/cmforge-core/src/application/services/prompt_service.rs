//! Prompt Service - interactive configuration collection.
//!
//! Gathers configuration overrides from the console, never accepting a
//! malformed value. Empty input at any prompt keeps the default; invalid
//! non-empty input prints an error line and re-prompts, with no retry cap.

use tracing::{debug, instrument};

use crate::{
    application::ports::Console,
    domain::{
        Answer, DEFAULT_CMAKE_MIN_VERSION, DEFAULT_PROJECT_NAME, ProjectConfig,
        is_valid_project_name, is_valid_version,
    },
    error::ForgeResult,
};

/// Error line shown when a non-empty input fails its predicate.
const RETRY_MESSAGE: &str = "Error setting the value, try again...";

/// Collects a validated [`ProjectConfig`] through the `Console` port.
pub struct PromptService {
    console: Box<dyn Console>,
}

impl PromptService {
    /// Create a prompt service with the given console adapter.
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Run the fixed three-question sequence and build the config.
    ///
    /// Question order is part of the contract: CMake minimum version,
    /// project name, then Qt usage.
    #[instrument(skip_all)]
    pub fn collect_config(&self) -> ForgeResult<ProjectConfig> {
        let cmake_min_version = self
            .collect_value(
                &format!(
                    "Minimum required CMake version (by default {DEFAULT_CMAKE_MIN_VERSION}): "
                ),
                is_valid_version,
            )?
            .unwrap_or_else(|| DEFAULT_CMAKE_MIN_VERSION.to_string());

        let project_name = self
            .collect_value("Project name: ", is_valid_project_name)?
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        // Empty answer keeps the default (no Qt); a validated answer maps
        // to the flag through Answer::as_bool.
        let using_qt = self
            .collect_value(
                "Is this project using Qt (y/n) (by default No): ",
                Answer::is_valid,
            )?
            .is_some_and(|raw| {
                // The predicate already validated the raw answer, so parse
                // cannot fail here.
                Answer::parse(&raw).map(Answer::as_bool).unwrap_or(false)
            });

        debug!(%cmake_min_version, %project_name, using_qt, "configuration collected");

        // Values passed the prompt predicates, so construction succeeds;
        // the re-validation inside new() is the domain's own invariant.
        Ok(ProjectConfig::new(
            project_name,
            cmake_min_version,
            using_qt,
        )?)
    }

    /// Prompt until the user gives empty input (`None`, keep default) or a
    /// value satisfying `predicate` (`Some(raw)`).
    ///
    /// Blocking and unbounded: malformed non-empty input never terminates
    /// the loop on its own. The only failure path is the console itself
    /// (EOF or write error).
    pub fn collect_value(
        &self,
        prompt: &str,
        predicate: impl Fn(&str) -> bool,
    ) -> ForgeResult<Option<String>> {
        loop {
            self.console.prompt(prompt)?;
            let raw = self.console.read_line()?;

            if raw.is_empty() {
                return Ok(None);
            }
            if predicate(&raw) {
                return Ok(Some(raw));
            }
            self.console.write_line(RETRY_MESSAGE)?;
        }
    }
}
