use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    batch::{self, BatchArgs},
    run::{self, RunArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "nest-sim",
    version,
    about = "Nested-sampling evidence estimator for the Gaussian-well model"
)]
struct Cli {
    /// Log verbosity written to stderr (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Perform a single nested-sampling run and report its evidence.
    Run(RunArgs),
    /// Perform many independent runs and compare mean ln Z with the exact value.
    Batch(BatchArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(args) => run::run(&args),
        Command::Batch(args) => batch::run(&args),
    }
}
