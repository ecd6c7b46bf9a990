//! statuslog CLI entry point.

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        // Config failures happen before a logger is installed; the
        // default singleton is used in that case.
        statuslog_core::global().error(&format_args!("{:#}", e));
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("statuslog=warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
