//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gavel",
    version,
    about = "Argue a case against an AI opposing counsel"
)]
pub struct Cli {
    /// Case to argue: an id or a title fragment (default: the first case)
    #[arg(short, long)]
    pub case: Option<String>,

    /// List the built-in cases and exit
    #[arg(long)]
    pub list_cases: bool,

    /// Path to a configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and use built-in defaults
    #[arg(long)]
    pub no_config: bool,

    /// Run offline with canned counsel lines, even if an API key is set
    #[arg(long)]
    pub offline: bool,

    /// Oracle model override
    #[arg(long)]
    pub model: Option<String>,

    /// Suppress decorative output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
