//! `generate` command: render and write the toolbar icons

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use super::OutputFormat;
use crate::icon::{self, GenerationReport};
use crate::settings::Settings;

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Directory to write icon{S}.png files into
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Icon size in pixels (repeat for several sizes)
    #[arg(short = 's', long = "size")]
    pub sizes: Vec<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: GenerateArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let settings = Settings::load_or_default(config)?.with_overrides(args.out_dir, &args.sizes);
    let palette = settings.validate()?;

    tracing::debug!(
        "Generating sizes {:?} into {}",
        settings.sizes,
        settings.output_dir.display()
    );

    let report = icon::generate_all(&settings.sizes, &palette, &settings.output_dir)
        .with_context(|| format!("generating icons in {}", settings.output_dir.display()))?;

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn format_text(report: &GenerationReport) -> String {
    let mut out = String::new();
    for icon in &report.icons {
        out.push_str(&format!(
            "Created {} ({}x{})\n",
            icon::icon_file_name(icon.size),
            icon.size,
            icon.size
        ));
    }
    out.push_str("All icons created successfully!\n");
    out.push_str("\nTo use these icons:\n");
    out.push_str("1. Make sure the PNG files are in the images/ directory\n");
    out.push_str("2. Load the extension in Chrome\n");
    out.push_str("3. The icons should appear in the toolbar and extension management\n");
    out
}
