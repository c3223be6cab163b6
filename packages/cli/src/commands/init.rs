use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::store::FileStore;
use anyhow::Result;
use atelier_model::VisualElementModel;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Store directory
    #[arg(short, long, default_value = ".atelier")]
    pub store_dir: String,

    /// Acting user name
    #[arg(short, long, default_value = "designer")]
    pub user: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

/// Component written as a starting point
fn example_component() -> VisualElementModel {
    VisualElementModel::new("div")
        .with_property("-name: 'Welcome'")
        .with_style("column")
        .with_style("gap: 8")
        .with_style("padding: 16")
        .with_children([
            VisualElementModel::new("h1")
                .with_property("text: 'Hello from Atelier'")
                .with_style("font-size: 24"),
            VisualElementModel::new("img")
                .with_property("w: 320")
                .with_property("h: 180"),
            VisualElementModel::new("button")
                .with_property("text: props.label")
                .with_property("onClick: props.onContinue")
                .with_style("hover:background-color: #eee"),
        ])
}

pub async fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Atelier project...".bright_blue().bold());

    let config = Config {
        store_dir: args.store_dir.clone(),
        user: args.user.clone(),
        ..Config::default()
    };

    let store = FileStore::new(config.store_dir(cwd));
    let example = store.component_path(1);
    if !example.exists() {
        store.save_component(1, &example_component()).await?;
        println!("  {} Created {}/components/1.tree", "✓".green(), args.store_dir);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: atelier preview 1");
    println!("  2. Run: atelier convert \"padding: 8 16\" \"hover:color: #3366FF\"");

    Ok(())
}
