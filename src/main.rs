use clap::Parser;
use simpletask::cli::commands::Cli;
use simpletask::io::config_io::load_config;
use simpletask::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "config load failed");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = simpletask::tui::run(&config) {
        tracing::error!(%e, "ui exited with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
