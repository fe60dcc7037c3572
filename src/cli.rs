//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library. Project type and name are taken as
//! plain strings and validated by the library, so that invalid values are
//! reported with the generator's own usage message.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use makeproject::config::{EngineSettings, FileConfig};

/// Command-line arguments that shape the generated project.
#[derive(Parser)]
struct GenerationArgs {
    /// Engine to wire the project to (defaults to "wendy")
    ///
    /// Names the `CMake` target, the C++ namespace, the sibling source
    /// directory and the shared media directory the project links against.
    #[arg(short = 'e', long)]
    engine: Option<String>,

    /// Extra directory to create, relative to the project destination
    ///
    /// Can be specified multiple times. Added to the standard layout
    /// (src, data/fonts, data/sounds, data/shaders, data/models, data/textures).
    #[arg(long = "dir", value_name = "DIR", action = clap::ArgAction::Append)]
    dirs: Vec<PathBuf>,

    /// Show what would be generated without touching the disk
    ///
    /// Runs the whole build against an in-memory copy of the destination,
    /// so blocked paths and link conflicts are still reported.
    #[arg(long)]
    dry_run: bool,
}

/// Command-line arguments controlling console output.
#[derive(Parser)]
struct OutputArgs {
    /// Print one line per created directory, link and file
    #[arg(short = 'v', long, conflicts_with_all = ["quiet", "json"])]
    verbose: bool,

    /// Print nothing on success
    #[arg(short = 'q', long, conflicts_with = "json")]
    quiet: bool,

    /// Output the build report as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// How much human-readable output to print.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verbosity {
    /// Nothing on success
    Quiet,
    /// A short summary
    Normal,
    /// One line per filesystem action
    Verbose,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "makeproject")]
#[command(
    about = "Generate a Demo, Game or Test project skeleton (CMake build files and a C++ stub) for the wendy engine"
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Project type: Demo, Game or Test (case-insensitive)
    #[arg(value_name = "TYPE")]
    kind: Option<String>,

    /// Project name: a letter followed by letters, digits or underscores
    ///
    /// Normalized to lowercase; used as namespace and `CMake` project name.
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Destination directory (defaults to the lowercased name)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Generation options
    #[command(flatten)]
    generation: GenerationArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// The raw type and name, when both were given.
    #[must_use]
    pub fn project_args(&self) -> Option<(&str, &str)> {
        Some((self.kind.as_deref()?, self.name.as_deref()?))
    }

    /// The explicit destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Whether `--dry-run` is enabled.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.generation.dry_run
    }

    /// Resolve engine settings from CLI args, config file, or defaults.
    ///
    /// Priority: `--engine` > config file `[engine]` > built-in defaults.
    /// Only the engine name can be overridden from the command line.
    #[must_use]
    pub fn engine_settings(&self, config: &FileConfig) -> EngineSettings {
        let mut engine = config.engine_settings();
        if let Some(name) = &self.generation.engine {
            engine.name.clone_from(name);
        }
        engine
    }

    /// Extra layout directories, merged from both sources (config values
    /// first, then CLI).
    #[must_use]
    pub fn extra_dirs(&self, config: &FileConfig) -> Vec<PathBuf> {
        let mut dirs = config.layout.extra_dirs.clone().unwrap_or_default();
        dirs.extend(self.generation.dirs.iter().cloned());
        dirs
    }

    /// Resolve the output verbosity.
    ///
    /// `--quiet` wins, then `--verbose` or the config file `verbose` flag.
    #[must_use]
    pub fn verbosity(&self, config: &FileConfig) -> Verbosity {
        if self.output.quiet {
            Verbosity::Quiet
        } else if self.output.verbose || config.output.verbose.unwrap_or(false) {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
