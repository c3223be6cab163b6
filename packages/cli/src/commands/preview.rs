use crate::config::Config;
use crate::store::FileStore;
use anyhow::Result;
use atelier_model::{ComponentId, Path};
use atelier_preview::Interpreter;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Component to resolve
    pub component: ComponentId,

    /// Path to highlight (`0,1`)
    #[arg(long)]
    pub highlight: Option<Path>,

    /// Resolve as another user (their drafts win)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn preview(args: PreviewArgs, config: &Config, store: &FileStore) -> Result<()> {
    let project = config.project_config(store).await?;
    let registry = config.registry();

    let mut options = config.preview_options();
    if let Some(user) = args.user {
        options.user = user;
    }
    options.highlight = args.highlight;

    let sink = |id: &str| eprintln!("{} highlight {}", "→".cyan(), id);
    let interpreter = Interpreter::new(store, &registry, &project, options).on_highlight(&sink);
    let document = interpreter.resolve_component(args.component).await?;

    let json = if args.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{}", json);
    Ok(())
}
