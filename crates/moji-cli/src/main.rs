//! moji CLI - render text with inline emoji from the command line

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.command.log_level());

    let result = match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Segment(args) => commands::segment::run(args),
        Commands::Info => commands::info::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the command's own verbosity flags
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
