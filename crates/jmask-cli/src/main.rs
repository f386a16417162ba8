mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays clean for
    // masked output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Mask {
            rules,
            input,
            output,
        } => commands::mask::handle(rules, input, output),
        cli::Commands::Check { rules } => commands::check::handle(rules),
    }
}
