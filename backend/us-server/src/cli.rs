use std::path::PathBuf;

use clap::Parser;

/// User service HTTP server
#[derive(Parser, Debug)]
#[command(name = "us-server", version, about)]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(short = 'c', long = "config")]
    pub config: PathBuf,
}
