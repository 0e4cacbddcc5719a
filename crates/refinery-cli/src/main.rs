//! Refinery CLI - record cleaning and enrichment service.

mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    // A missing .env file is normal; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Serve { host, port, model } => commands::serve::run(host, port, model),

        Commands::Clean {
            file,
            mode,
            output,
            delimiter,
            model,
        } => commands::clean::run(file, mode, output, delimiter, model, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
