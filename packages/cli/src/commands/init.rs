use anyhow::Context;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;
use viewforge_model::{ComponentKind, ComponentNode, ViewDocument};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// View name
    #[arg(default_value = "Untitled View")]
    pub name: String,

    /// Output file
    #[arg(short, long, default_value = "view.json")]
    pub output: PathBuf,
}

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    let mut doc = ViewDocument::new(&args.name, "");

    // Starter content so the file opens with something visible
    let mut heading = ComponentNode::new("starter-heading", ComponentKind::Atomic, "Text");
    heading
        .props
        .insert("children".to_string(), json!(args.name.clone()));
    heading.props.insert("variant".to_string(), json!("heading"));
    doc.root.children.push(heading);

    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "{} {} → {}",
        "Created".green().bold(),
        args.name,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_starter_view() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("view.json");

        run(InitArgs {
            name: "Landing".to_string(),
            output: output.clone(),
        })
        .unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        let doc: ViewDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.name, "Landing");
        assert_eq!(doc.root.children.len(), 1);
        assert_eq!(doc.root.children[0].name, "Text");
    }
}
