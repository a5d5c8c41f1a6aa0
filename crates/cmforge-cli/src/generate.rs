//! Implementation of the single `cmforge` use case.
//!
//! Responsibility: wire the production adapters into the core services,
//! run the prompt sequence, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use cmforge_adapters::{LocalFilesystem, StdConsole};
use cmforge_core::application::{PromptService, ScaffoldService};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generation run.
///
/// Sequence:
/// 1. Collect the configuration interactively (blocking prompt loop)
/// 2. Scaffold the project under the `--output` directory
/// 3. Print next-steps guidance
#[instrument(skip_all, fields(output = %cli.output.display()))]
pub fn execute(cli: &Cli, _config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    output.header("cmforge - CMake starter project generator")?;

    let prompts = PromptService::new(Box::new(StdConsole::new()));
    let project = prompts.collect_config()?;

    debug!(
        project = %project.project_name(),
        cmake = %project.cmake_min_version(),
        qt = project.using_qt(),
        "Configuration collected"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    info!(project = %project.project_name(), "Generation started");
    service.scaffold(&project, &cli.output)?;
    info!(project = %project.project_name(), "Generation completed");

    output.success(&format!(
        "Project '{}' created!",
        project.project_name()
    ))?;
    output.info(&format!(
        "Location: {}",
        cli.output.join(project.project_name()).display()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project.project_name()))?;
        output.print("  cmake -B build && cmake --build build")?;
        output.print("  # Enable tests with -DPROJ_TESTING=ON")?;
    }

    Ok(())
}
