use crate::tree_file::{read_tree, render_tree, TREE_EXTENSION};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Tree file, or a directory whose `.tree` files are rewritten in place
    pub path: PathBuf,

    /// Print JSON instead of the tree format (single file only)
    #[arg(long)]
    pub json: bool,
}

pub fn fmt(args: FmtArgs) -> Result<()> {
    if args.path.is_file() {
        let tree = read_tree(&args.path)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&tree)?);
        } else {
            print!("{}", atelier_model::serialize(&tree));
        }
        return Ok(());
    }

    if !args.path.is_dir() {
        return Err(anyhow!("Path does not exist: {}", args.path.display()));
    }
    if args.json {
        return Err(anyhow!("--json only applies to a single file"));
    }

    let files = find_tree_files(&args.path);
    let mut changed = 0;
    let mut failed = 0;

    for file in &files {
        let relative_path = file.strip_prefix(&args.path).unwrap_or(file);
        match format_in_place(file) {
            Ok(true) => {
                changed += 1;
                println!("  {} {}", "✓".green(), relative_path.display());
            }
            Ok(false) => {}
            Err(e) => {
                failed += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    println!(
        "Checked {} files, {} reformatted, {} failed",
        files.len(),
        changed,
        failed
    );
    if failed > 0 {
        return Err(anyhow!("{} files could not be formatted", failed));
    }
    Ok(())
}

fn find_tree_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some(TREE_EXTENSION))
        .collect()
}

/// Rewrite `file` in normalized form. `true` when the contents changed.
fn format_in_place(file: &Path) -> Result<bool> {
    let source = fs::read_to_string(file)?;
    let formatted = render_tree(&read_tree(file)?, file)?;
    if formatted == source {
        return Ok(false);
    }
    fs::write(file, formatted)?;
    Ok(true)
}
