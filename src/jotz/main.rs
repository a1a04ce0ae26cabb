use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use jotz::api::JotzApi;
use jotz::config::JotzConfig;
use jotz::error::{JotzError, Result};
use jotz::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod args;
mod cli;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_path = resolve_data_path(&cli)?;

    let store = FileStore::new(data_path);
    let mut api = JotzApi::open(store)?;

    let stdin = io::stdin();
    cli::repl::run(&mut api, &mut stdin.lock())
}

fn resolve_data_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "jotz", "jotz")
        .ok_or_else(|| JotzError::Store("Could not determine data directory".to_string()))?;
    let data_dir = proj_dirs.data_dir().to_path_buf();
    let config = JotzConfig::load(&data_dir)?;
    Ok(config.data_path(&data_dir))
}
