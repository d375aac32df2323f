use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use viewforge_common::RealFileWriter;
use viewforge_export::{ExportFormat, ExportManager};

use super::{builtin_registry, parse_input};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TargetFormat {
    Json,
    Html,
    Php,
    Both,
}

impl From<TargetFormat> for ExportFormat {
    fn from(value: TargetFormat) -> Self {
        match value {
            TargetFormat::Json => ExportFormat::Json,
            TargetFormat::Html => ExportFormat::Html,
            TargetFormat::Php => ExportFormat::Php,
            TargetFormat::Both => ExportFormat::Both,
        }
    }
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input view file (.json, .html or .php)
    pub input: PathBuf,

    /// Target format
    #[arg(short, long, value_enum, default_value_t = TargetFormat::Html)]
    pub to: TargetFormat,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let registry = builtin_registry();
    let result = parse_input(&args.input, &registry)?;
    debug!(view = %result.document.name, format = ?result.source_format, "imported view");

    for warning in &result.errors {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    let mut writer = RealFileWriter::new(&args.out);
    let payloads = ExportManager::save_to_file(&result.document, args.to.into(), &mut writer)?;
    for payload in &payloads {
        println!(
            "{} {}",
            "Wrote".green().bold(),
            args.out.join(&payload.filename).display()
        );
    }
    Ok(())
}
