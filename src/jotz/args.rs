use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotz")]
#[command(version)]
#[command(about = "A tagged notebook for the command line", long_about = None)]
pub struct Cli {
    /// Notebook file to use instead of the configured location
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
