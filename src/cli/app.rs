//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use rollbook::output::OutputMode;

/// rollbook - Course enrollment with eligibility checks
#[derive(Parser, Debug)]
#[command(
    name = "rollbook",
    version,
    about = "Course enrollment with eligibility checks",
    long_about = "Model student course enrollment in memory.\n\n\
                  Every enrollment attempt runs an ordered rule chain:\n\
                  already enrolled, prerequisites, credit limit, schedule conflict."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the sample enrollment scenario
    Demo,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Demo) => commands::demo(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("rollbook v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rollbook v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'rollbook --help' for usage");
                println!("Run 'rollbook demo' to see the sample scenario");
            }
            Ok(())
        },
    }
}
