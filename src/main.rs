use clap::Parser;
use course_schedule::cli::{Cli, Commands};
use course_schedule::cli_handlers;
use std::process;

fn main() {
    // Logs go to stderr so reports on stdout stay parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { catalog, json } => cli_handlers::handle_check(&catalog, json),
        Commands::Order { catalog, json } => cli_handlers::handle_order(&catalog, json),
        Commands::Demo => cli_handlers::handle_demo(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
