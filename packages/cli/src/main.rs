mod commands;
mod config;
mod store;
mod tree_file;

use anyhow::Result;
use atelier_styles::ProjectConfig;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    convert, fmt, import_classes, import_style, init, move_node, preview, ConvertArgs, FmtArgs,
    ImportClassesArgs, ImportStyleArgs, InitArgs, MoveArgs, PreviewArgs,
};
use config::Config;
use std::path::Path;
use store::FileStore;
use tracing_subscriber::EnvFilter;

/// Atelier CLI - design trees, utility classes and live previews
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Atelier project
    Init(InitArgs),

    /// Convert style declarations to utility classes
    Convert(ConvertArgs),

    /// Convert inline CSS to style declarations
    ImportStyle(ImportStyleArgs),

    /// Convert a utility class list to style declarations
    ImportClasses(ImportClassesArgs),

    /// Move a node within a tree file
    Move(MoveArgs),

    /// Resolve a stored component into a render tree (JSON)
    Preview(PreviewArgs),

    /// Normalize tree files
    Fmt(FmtArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(cwd: &Path) -> Result<(Config, FileStore)> {
    let config = Config::load(cwd)?;
    let store = FileStore::new(config.store_dir(cwd));
    Ok((config, store))
}

async fn project_config(cwd: &Path) -> Result<ProjectConfig> {
    let (config, store) = open_store(cwd)?;
    config.project_config(&store).await
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd).await,
        Command::Convert(args) => convert(args, &project_config(&cwd).await?),
        Command::ImportStyle(args) => import_style(args, &project_config(&cwd).await?),
        Command::ImportClasses(args) => import_classes(args, &project_config(&cwd).await?),
        Command::Move(args) => move_node(args),
        Command::Preview(args) => {
            let (config, store) = open_store(&cwd)?;
            preview(args, &config, &store).await
        }
        Command::Fmt(args) => fmt(args),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
