//! Command-line interface for the Plainmark template generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use plainmark_cli::{commands, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plainmark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log generator activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default plainmark.toml in the current directory
    Init,

    /// Print a template with comments, styles and scripts removed
    Strip {
        /// Template file
        file: PathBuf,
    },

    /// Generate analyzable code for a template
    #[command(visible_alias = "g")]
    Generate {
        /// Template file
        file: PathBuf,

        /// Parser output for the preprocessed template, as JSON
        #[arg(long)]
        ast: PathBuf,

        /// Write the code to this path instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the order in which template nodes are visited
    Trace {
        /// Template file
        file: PathBuf,

        /// Parser output for the preprocessed template, as JSON
        #[arg(long)]
        ast: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Strip { file } => commands::strip::execute(&file),
        Commands::Generate { file, ast, out } => {
            commands::generate::execute(&file, &ast, out.as_deref())
        }
        Commands::Trace { file, ast } => commands::trace::execute(&file, &ast),
    }
}
