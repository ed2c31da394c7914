use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "simpletask", about = concat!("[\u{2713}] simpletask v", env!("CARGO_PKG_VERSION"), " - a two-screen task list"), version)]
pub struct Cli {
    /// UI config file (TOML)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
