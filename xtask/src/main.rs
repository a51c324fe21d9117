//! xtask - Development task runner for conslist
//!
//! Usage:
//!   cargo xtask demo
//!   cargo xtask stress [--size <n>] [--repeat <n>] [--scenario <yaml>]

mod demo;
mod stress;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for conslist")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every list operation applied to the list [1, 2, 3, 4]
    Demo,
    /// Run every list operation on a large list and report timings
    Stress(stress::StressArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            demo::run();
            Ok(())
        }
        Commands::Stress(args) => stress::run(&args),
    }
}
