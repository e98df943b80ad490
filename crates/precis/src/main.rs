mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize(args) => commands::summarize::run(&args),
        Commands::Stats(args) => commands::stats::run(&args),
        Commands::Compare(args) => commands::compare::run(&args),
        Commands::Version => commands::version::run(),
    }
}
