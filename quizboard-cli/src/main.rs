//! quizboard CLI
//!
//! Command-line interface for checking, importing, and managing trivia
//! game files in the quizboard library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizboard")]
#[command(about = "Manage the quizboard trivia game library", long_about = None)]
struct Cli {
    /// Library root directory (defaults to the configured library)
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a game file without importing it
    Check {
        /// A native game file (.xml) or an HTML export (.html)
        file: PathBuf,
    },

    /// Import a game file into the library
    Import {
        /// A native game file (.xml) or an HTML export (.html)
        file: PathBuf,
    },

    /// List the games in the library
    List,

    /// Remove a game from the library by name
    Remove {
        /// Exact game name as shown by `list`
        name: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::Import { file } => commands::import::run(&file, cli.library),
        Commands::List => commands::list::run(cli.library),
        Commands::Remove { name } => commands::remove::run(&name, cli.library),
    }
}
