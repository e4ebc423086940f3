//! certdrill CLI: the interactive quiz trainer.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "certdrill", version, about = "Interactive certification quiz trainer")]
struct Cli {
    /// Directory with one subdirectory per topic
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for question sampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every topic's question files
    Validate,

    /// Create a starter config and a sample topic
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("certdrill=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::execute(cli.data_dir, cli.config, cli.seed),
        Some(Commands::Validate) => commands::validate::execute(cli.data_dir, cli.config).map(|()| 0),
        Some(Commands::Init) => commands::init::execute().map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
