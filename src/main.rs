use clap::Parser;
use trashroute::cli::{self, CliConfig};

fn main() {
    let config = CliConfig::parse();

    cli::init_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match cli::run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("trashroute failed: {}", e);
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}
