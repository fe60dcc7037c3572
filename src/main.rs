//! # makeproject
//!
//! A one-shot scaffolding generator for projects built on the wendy engine.
//!
//! Given a project type, a name and an optional destination, it creates the
//! directory layout, `CMake` build descriptors and a C++ stub class, and links
//! the project's `data/` directory to the engine's shared media.
//!
//! ## Usage
//!
//! ```bash
//! # Create skyfall/ with a Game class
//! makeproject Game skyfall
//!
//! # Explicit destination, see what would happen first
//! makeproject test MyTest build/out --dry-run
//!
//! # Inspect the configuration file
//! makeproject config show
//! ```

mod cli;

use anyhow::{Context, Ok, Result};
use clap::Parser;
use clap::error::ErrorKind;
use cli::{Cli, Commands, ConfigCommand, Verbosity};
use colored::{ColoredString, Colorize};
use makeproject::{
    BuildReport, EngineSettings, EntryStatus, FileConfig, GenerateError, ProjectGenerator, USAGE,
    fs::{DiskFs, MemoryFs},
    generator::DEFAULT_LAYOUT,
    output::JsonOutput,
    prepare,
};
use std::path::Path;
use std::process::exit;

/// Entry point for the makeproject application.
///
/// Argument errors, including invalid project types and names, exit with
/// status 1 after printing the usage line. Any other error is printed to
/// stderr and also exits with status 1.
fn main() {
    let args = match Cli::try_parse() {
        std::result::Result::Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            exit(1);
        }
    };

    if let Err(err) = inner_main(&args) {
        eprintln!("{} {err}", "Error:".red());

        if err
            .downcast_ref::<GenerateError>()
            .is_some_and(GenerateError::is_usage)
        {
            eprintln!("{USAGE}");
        }

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Validates every argument before the first filesystem call, then runs the
/// build against the disk (or an in-memory overlay for `--dry-run`) and
/// prints the report.
///
/// # Errors
///
/// Returns usage errors from argument validation, generation errors from
/// the build, config-file errors from the `config` subcommand, or JSON
/// serialization errors.
fn inner_main(args: &Cli) -> Result<()> {
    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let Some((kind, name)) = args.project_args() else {
        eprintln!("{USAGE}");
        exit(1);
    };

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let generator = prepare(
        kind,
        name,
        args.destination(),
        args.engine_settings(&file_config),
        &args.extra_dirs(&file_config),
    )?;

    let dry_run = args.dry_run();
    let report = if dry_run {
        generator.build(&mut MemoryFs::overlaying_disk())?
    } else {
        generator.build(&mut DiskFs::new())?
    };

    if json_mode {
        let output = JsonOutput::from_report(&generator, &report, dry_run);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&generator, &report, dry_run, args.verbosity(&file_config));
    }

    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Print a human-readable build summary to stdout.
fn print_report(
    generator: &ProjectGenerator,
    report: &BuildReport,
    dry_run: bool,
    verbosity: Verbosity,
) {
    if verbosity == Verbosity::Quiet {
        return;
    }

    let project = generator.project();
    let headline = format!(
        "{} project '{}' in {}",
        project.kind,
        project.name,
        report.destination.display()
    );

    if dry_run {
        println!(
            "{} {}",
            "🧪 Dry run complete!".yellow(),
            format!("Would create {headline}").bright_white()
        );
    } else {
        println!("{}", format!("✅ Created {headline}").green());
    }

    if verbosity == Verbosity::Verbose {
        for dir in &report.directories {
            println!("  {} {}", status_label(dir.status, "created"), dir.path.display());
        }
        println!(
            "  {} {} -> {}",
            status_label(report.link.status, "linked"),
            report.link.path.display(),
            report.link.target.display()
        );
        for file in &report.files {
            println!("  {} {}", status_label(EntryStatus::Created, "wrote"), file.display());
        }
        return;
    }

    let created = report.created_count();
    println!(
        "  📁 Directories: {} created, {} existing",
        created.to_string().green(),
        report.directories.len() - created
    );
    println!(
        "  🔗 Media link: {} -> {}",
        report.link.path.display(),
        report.link.target.display()
    );
    println!("  📝 Files written: {}", report.files.len().to_string().green());
}

/// Fixed-width label for one verbose output line.
fn status_label(status: EntryStatus, created: &str) -> ColoredString {
    match status {
        EntryStatus::Created => format!("{created:<8}").cyan(),
        EntryStatus::Existing => format!("{:<8}", "exists").dimmed(),
    }
}

/// Load the configuration file, warning and using defaults when it is malformed.
fn load_config(json_mode: bool) -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        if !json_mode {
            eprintln!(
                "{} {e}",
                "Warning: ignoring config file, using built-in defaults:".yellow()
            );
        }
        FileConfig::default()
    })
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# makeproject configuration
# All values shown are their defaults. Uncomment and change as needed.

[engine]
# Engine the generated project links against. Names the CMake target, the
# C++ namespace, the sibling source directory and the shared media directory.
# name = "wendy"

# Reverse-DNS prefix of the macOS bundle identifier (<prefix>.<type>s.<name>),
# made of identifiers joined by dots
# bundle_prefix = "org.elmindreda"

# Version passed to cmake_minimum_required (e.g. "3", "3.10", "3.10.2")
# cmake_minimum = "2.8"

[layout]
# Directories created in addition to src/ and data/{fonts,sounds,shaders,models,textures}
# Relative to the project, without '..', and never a generated file or data/<engine>
# extra_dirs = []

[output]
# Print one line per created directory, link and file
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    let path = FileConfig::config_path()
        .context("Could not determine the config directory on this platform");

    match cmd {
        ConfigCommand::Path => println!("{}", path?.display()),
        ConfigCommand::Show => show_config(path.ok().as_deref())?,
        ConfigCommand::Init => init_config(&path?)?,
    }
    Ok(())
}

/// Print the file values, then what they mean for a generated project.
fn show_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) if p.exists() => {
            println!("Config file: {} (found)", p.display());
            FileConfig::load()?
        }
        Some(p) => {
            println!("Config file: {} (not found - showing defaults)", p.display());
            FileConfig::default()
        }
        None => {
            println!("Config file: (cannot determine path on this platform)");
            FileConfig::default()
        }
    };

    println!();
    println!("{}", format_config(&config));
    println!();
    println!("{}", format_effective(&config));

    if let Err(e) = config.engine_settings().validate() {
        println!();
        println!("{} {e}", "⚠️  Projects cannot be generated with these settings:".yellow());
    }
    Ok(())
}

/// Describe the engine wiring and layout a generated project would get.
fn format_effective(config: &FileConfig) -> String {
    let engine = config.engine_settings();
    let mut directories: Vec<String> = DEFAULT_LAYOUT.into_iter().map(String::from).collect();
    directories.extend(
        config
            .layout
            .extra_dirs
            .iter()
            .flatten()
            .map(|dir| dir.display().to_string()),
    );

    format!(
        "\
Generated projects
  include       = <{header}>
  media link    = data/{name} -> {target}
  bundle id     = {prefix}.<type>s.<name>
  cmake_minimum = {cmake_minimum}
  directories   = {directories}",
        header = engine.umbrella_header(),
        name = engine.name,
        target = engine.media_link_target().display(),
        prefix = engine.bundle_prefix,
        cmake_minimum = engine.cmake_minimum,
        directories = directories.join(", "),
    )
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_paths(val: Option<&[std::path::PathBuf]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let defaults = EngineSettings::default();

    format!(
        "\
[engine]
name          = {name}
bundle_prefix = {bundle_prefix}
cmake_minimum = {cmake_minimum}

[layout]
extra_dirs    = {extra_dirs}

[output]
verbose       = {verbose}",
        name = show_str(config.engine.name.as_deref(), &defaults.name),
        bundle_prefix = show_str(config.engine.bundle_prefix.as_deref(), &defaults.bundle_prefix),
        cmake_minimum = show_str(config.engine.cmake_minimum.as_deref(), &defaults.cmake_minimum),
        extra_dirs = show_paths(config.layout.extra_dirs.as_deref()),
        verbose = show_bool(config.output.verbose, false),
    )
}

/// Write the commented config template to `path`, never replacing an existing file.
fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Run `makeproject config show` to see the values it sets.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    println!("{} {}", "📝 Config file written to:".green(), path.display());
    Ok(())
}
