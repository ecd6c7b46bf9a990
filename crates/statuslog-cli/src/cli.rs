//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use statuslog_core::{LoggerConfig, Logger, Sink};
use statuslog_types::{ColorMode, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statuslog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write leveled, colorized status lines to stderr", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(long, global = true, env = "STATUSLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum severity to emit (debug, task, warn, alert, error)
    #[arg(short, long, global = true)]
    pub level: Option<Severity>,

    /// Marker styling (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Text prepended to every line
    #[arg(short, long, global = true)]
    pub prefix: Option<String>,

    /// Prepend the local time to every line
    #[arg(short, long, global = true)]
    pub timestamp: bool,

    /// Discard all output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Words making up a status line.
#[derive(Args, Debug, Clone)]
pub struct Words {
    /// Message words, joined with single spaces (use `--` before words
    /// starting with a hyphen)
    pub words: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit a debug line
    Debug(Words),

    /// Emit a task line (>>>)
    Task(Words),

    /// Emit a warning line (!!!)
    Warn(Words),

    /// Emit an alert line ( ! )
    Alert(Words),

    /// Emit a success line ( ✔ )
    Ok(Words),

    /// Emit a progress line ( - )
    Progress(Words),

    /// Emit a fatal line (XXX) and exit with status 1
    Fatal(Words),

    /// Exit with status 1 if --fail is given, printing the words as context
    Check {
        /// Error description to fail with
        #[arg(long)]
        fail: Option<String>,

        #[command(flatten)]
        words: Words,
    },

    /// Exit with status 1, reporting "Fatal error: <description>"
    Error {
        /// Error description
        description: String,
    },

    /// Emit one line of every kind
    Demo,

    /// Emit many lines from several threads at once
    Stress {
        /// Number of writer threads
        #[arg(long, default_value_t = 8)]
        threads: usize,

        /// Lines written by each thread
        #[arg(long, default_value_t = 100)]
        lines: usize,
    },
}

impl Cli {
    /// Resolve configuration: file, then environment, then flags.
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => LoggerConfig::default(),
        };
        config = config
            .with_env_overrides()
            .context("reading STATUSLOG_* environment")?;

        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = Some(prefix.clone());
        }
        config.timestamp |= self.timestamp;
        config.silenced |= self.quiet;

        Ok(config)
    }

    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        let config = self.logger_config()?;
        tracing::debug!(?config, "resolved logger configuration");
        if statuslog_core::install(Logger::from_config(&config, Sink::Stderr)).is_err() {
            anyhow::bail!("status logger already initialized");
        }

        match &self.command {
            Commands::Debug(w) => emit::debug(&w.words),
            Commands::Task(w) => emit::task(&w.words),
            Commands::Warn(w) => emit::warn(&w.words),
            Commands::Alert(w) => emit::alert(&w.words),
            Commands::Ok(w) => emit::ok(&w.words),
            Commands::Progress(w) => emit::progress(&w.words),
            Commands::Fatal(w) => emit::fatal(&w.words),
            Commands::Check { fail, words } => emit::check(fail.as_deref(), &words.words),
            Commands::Error { description } => emit::error(description),
            Commands::Demo => demo::execute(),
            Commands::Stress { threads, lines } => stress::execute(*threads, *lines),
        }

        Ok(())
    }
}
