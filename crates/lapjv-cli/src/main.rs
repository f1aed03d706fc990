use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    solve::{self, SolveArgs},
    MatrixArgs,
};
use tracing_subscriber::EnvFilter;

mod commands;
mod prompt;

#[derive(Parser, Debug)]
#[command(
    name = "lapjv",
    version,
    about = "Linear assignment problem solver using the Jonker-Volgenant algorithm"
)]
struct Cli {
    #[command(flatten)]
    matrix: MatrixArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a JSON file describing a matrix with the given parameters.
    Generator(GenerateArgs),
    /// Solve a matrix read from a JSON file, stdin or the generator.
    Solver(SolveArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Generator(args) => generate::run(&cli.matrix, &args),
        Command::Solver(args) => solve::run(&cli.matrix, &args),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}
