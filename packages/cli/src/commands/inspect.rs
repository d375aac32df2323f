use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use viewforge_model::ComponentNode;

use super::{builtin_registry, parse_input};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input view file (.json, .html or .php)
    pub input: PathBuf,

    /// Show props on each node
    #[arg(short, long)]
    pub props: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let registry = builtin_registry();
    let result = parse_input(&args.input, &registry)?;
    let doc = &result.document;

    println!("{} {}", "View".cyan().bold(), doc.name.bold());
    if !doc.description.is_empty() {
        println!("  {}", doc.description.dimmed());
    }
    println!(
        "  {} nodes, updated {}",
        doc.root.node_count(),
        doc.metadata.updated.dimmed()
    );
    println!();

    print_node(&doc.root, 0, args.props);
    Ok(())
}

fn print_node(node: &ComponentNode, depth: usize, show_props: bool) {
    let indent = "  ".repeat(depth);
    let kind = format!("{:?}", node.kind).to_lowercase();
    println!(
        "{}{} {} {}",
        indent,
        node.name.bold(),
        format!("[{}]", kind).dimmed(),
        format!("#{}", node.id).cyan()
    );

    if show_props {
        for (key, value) in &node.props {
            println!("{}  {} = {}", indent, key.dimmed(), value);
        }
        for (key, value) in &node.styles {
            println!("{}  {}: {}", indent, key.dimmed(), value);
        }
    }

    for child in &node.children {
        print_node(child, depth + 1, show_props);
    }
}
