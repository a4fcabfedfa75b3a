use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;

mod commands;

#[derive(Parser)]
#[command(name = "pickle")]
#[command(about = "PickLE pick list viewer and checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pick list
    Show {
        /// Pick list file to read
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Hide components that are already picked
        #[arg(long)]
        unpicked: bool,

        /// Fail if the last component has no designator line
        #[arg(long)]
        strict: bool,
    },

    /// Parse the pick list and print a summary
    Check {
        /// Pick list file to read
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Fail if the last component has no designator line
        #[arg(long)]
        strict: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Show {
            file,
            format,
            category,
            unpicked,
            strict,
        } => commands::show::execute(&file, format, category, unpicked, strict),

        Commands::Check { file, strict } => commands::check::execute(&file, strict),
    }
}
