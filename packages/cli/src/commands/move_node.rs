use crate::tree_file::{read_tree, render_tree, write_tree};
use anyhow::Result;
use atelier_editor::{move_node as apply_move, DropPosition};
use atelier_model::Path;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Tree file (`.tree` or `.json`)
    pub file: PathBuf,

    /// Path of the node to move (`0,2`)
    pub source: Path,

    /// Path of the drop target
    pub target: Path,

    /// Where to drop relative to the target (before, after, inside)
    #[arg(short, long, default_value = "inside")]
    pub position: DropPosition,

    /// Rewrite the file instead of printing the new tree
    #[arg(short, long)]
    pub write: bool,
}

pub fn move_node(args: MoveArgs) -> Result<()> {
    let tree = read_tree(&args.file)?.into_ref();
    let outcome = apply_move(&tree, &args.source, &args.target, args.position)?;

    let selection = outcome
        .selection
        .as_ref()
        .map(Path::to_string)
        .unwrap_or_else(|| "-".to_string());

    if args.write {
        write_tree(&outcome.root, &args.file)?;
        eprintln!(
            "{} Moved {} {} {} in {} (selected {})",
            "✓".green(),
            args.source,
            args.position,
            args.target,
            args.file.display(),
            selection.cyan()
        );
    } else {
        print!("{}", render_tree(&outcome.root, &args.file)?);
        eprintln!("{} selected {}", "✓".green(), selection.cyan());
    }

    Ok(())
}
