// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `project-tracker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "project-tracker",
    version,
    about = "Track implementation progress of a project's functions and their dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root containing the docs directory.
    #[arg(long, value_name = "PATH", default_value = ".", global = true)]
    pub project: PathBuf,

    /// Config file (TOML). Defaults to `<project>/.project-tracker.toml` if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROJECT_TRACKER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Progress overview: counts per status and completion rate.
    Status,

    /// Set the status of one function.
    Update {
        /// Function id.
        function_id: String,
        /// One of: pending, in_progress, completed, blocked.
        status: String,
        /// Optional note stored with the task.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Print the architecture overview.
    Architecture,

    /// Current task with its full definition and dependency closure.
    Context,

    /// Full definition and status of one function.
    Function { function_id: String },

    /// One function plus every function it transitively depends on.
    Deps { function_id: String },

    /// Serve the tools as JSON-RPC over stdin/stdout.
    Serve,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
