use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jmask")]
#[command(about = "Mask sensitive fields in JSON documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask a JSON document using a rule configuration
    Mask {
        /// Path to the JSON rule configuration
        #[arg(long)]
        rules: PathBuf,

        /// Input document path, or '-' for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Write the masked document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a rule configuration without masking anything
    Check {
        /// Path to the JSON rule configuration
        #[arg(long)]
        rules: PathBuf,
    },
}
