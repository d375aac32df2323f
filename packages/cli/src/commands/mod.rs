pub mod convert;
pub mod init;
pub mod inspect;

pub use convert::ConvertArgs;
pub use init::InitArgs;
pub use inspect::InspectArgs;

use anyhow::{bail, Context};
use std::path::Path;
use viewforge_import::ParsedView;
use viewforge_registry::{install_builtins, ComponentRegistry};

pub fn builtin_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    install_builtins(&mut registry);
    registry
}

/// Parse an input file, dispatching on its extension
pub fn parse_input(path: &Path, registry: &ComponentRegistry) -> anyhow::Result<ParsedView> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let result = match extension.as_str() {
        "json" => viewforge_import::parse_structured(&source),
        "html" | "htm" => viewforge_import::parse_markup(&source, registry),
        "php" => viewforge_import::parse_templated(&source, registry),
        other => bail!("unsupported input extension: .{}", other),
    };

    if !result.parsed {
        bail!("import failed: {}", result.errors.join("; "));
    }
    Ok(result)
}
