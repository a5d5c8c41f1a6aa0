//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults. No business logic lives here. The project settings
//! themselves (CMake version, name, Qt) are *not* flags - they are collected
//! interactively by the core prompt service.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cmforge",
    bin_name = "cmforge",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Interactive CMake starter-project generator",
    long_about = "cmforge asks a few questions (minimum CMake version, project \
                  name, Qt usage) and generates a C++ starter project: a \
                  main.cpp, two test stubs, and three CMakeLists.txt files.",
    after_help = "EXAMPLES:\n\
        \x20 cmforge                      # generate into the current directory\n\
        \x20 cmforge -o ~/projects        # generate under ~/projects\n\
        \x20 printf '3.20.1\\nMyApp\\ny\\n' | cmforge   # scripted run"
)]
pub struct Cli {
    /// Directory the project directory is created under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory (default: current directory)"
    )]
    pub output: PathBuf,

    /// Flags shared with every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check - catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn output_defaults_to_current_directory() {
        let cli = Cli::parse_from(["cmforge"]);
        assert_eq!(cli.output, PathBuf::from("."));
    }

    #[test]
    fn output_flag_is_parsed() {
        let cli = Cli::parse_from(["cmforge", "-o", "/tmp/projects"]);
        assert_eq!(cli.output, PathBuf::from("/tmp/projects"));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["cmforge", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["cmforge", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
