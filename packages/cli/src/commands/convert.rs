use anyhow::Result;
use atelier_styles::{ProjectConfig, StyleEngine};
use clap::Args;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Style declarations (`padding: 8`, `hover:color: primary`, `column`)
    #[arg(required = true)]
    pub declarations: Vec<String>,

    /// Print the class attribute as exported into source
    #[arg(long)]
    pub attribute: bool,
}

#[derive(Debug, Args)]
pub struct ImportStyleArgs {
    /// Inline CSS (`display: flex; padding-top: 8px`)
    pub css: String,

    /// Print a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ImportClassesArgs {
    /// Utility class list (`flex pt-[8px] hover:text-[#333]`)
    pub classes: String,

    /// Print a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Declarations to utility classes, merged across the whole list
pub fn convert(args: ConvertArgs, project: &ProjectConfig) -> Result<()> {
    let engine = StyleEngine::from_config(project);

    if args.attribute {
        println!("className={}", engine.class_attribute(&args.declarations)?);
    } else {
        for class in engine.convert_declarations(&args.declarations)? {
            println!("{}", class);
        }
    }
    Ok(())
}

pub fn import_style(args: ImportStyleArgs, project: &ProjectConfig) -> Result<()> {
    let declarations = StyleEngine::from_config(project).convert_css_text(&args.css);
    print_declarations(&declarations, args.json)
}

pub fn import_classes(args: ImportClassesArgs, project: &ProjectConfig) -> Result<()> {
    let declarations = StyleEngine::from_config(project).convert_class_list(&args.classes);
    print_declarations(&declarations, args.json)
}

fn print_declarations(declarations: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(declarations)?);
    } else {
        for declaration in declarations {
            println!("{}", declaration);
        }
    }
    Ok(())
}
