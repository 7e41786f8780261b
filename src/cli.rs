// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `autoreload`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "autoreload",
    version,
    about = "Ask a server to reload when files in a directory are modified.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch (non-recursively).
    #[arg(value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Optional TOML file overriding the reset endpoint and credentials.
    ///
    /// Without it, the built-in defaults are used
    /// (`http://localhost:8042/tools/reset`, no authentication).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AUTORELOAD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
