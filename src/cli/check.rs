//! `check` command: verify an unpacked extension is ready to load

use std::path::{Path, PathBuf};

use clap::Args;

use super::OutputFormat;
use crate::extension::{self, CheckReport, CheckStatus};
use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Extension root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Icon directory, relative to the root
    #[arg(long, default_value = extension::DEFAULT_ICONS_DIR)]
    pub icons_dir: PathBuf,

    /// Icon size to expect (repeat for several sizes)
    #[arg(short = 's', long = "size")]
    pub sizes: Vec<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the check; `Ok(false)` means the extension is not ready
pub fn run(args: CheckArgs, config: Option<&Path>) -> anyhow::Result<bool> {
    let settings = Settings::load_or_default(config)?.with_overrides(None, &args.sizes);
    settings.validate()?;

    let report = extension::check_extension(&args.root, &args.icons_dir, &settings.sizes);

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.is_ready())
}

fn status_line(status: &CheckStatus, what: &str) -> String {
    match status {
        CheckStatus::Invalid(reason) => format!("[{}] {} - {}\n", status.label(), what, reason),
        _ => format!("[{}] {}\n", status.label(), what),
    }
}

fn format_text(report: &CheckReport) -> String {
    let mut out = format!("Checking extension files in {}\n", report.root.display());

    for file in &report.files {
        out.push_str(&status_line(&file.status, &file.path.display().to_string()));
    }

    match report.manifest.manifest.as_ref().map(|m| m.summary()) {
        Some(Some(summary)) => out.push_str(&format!(
            "[ok] manifest.json is valid JSON ({})\n",
            summary
        )),
        Some(None) => out.push_str("[ok] manifest.json is valid JSON\n"),
        None => out.push_str(&status_line(&report.manifest.status, "manifest.json contents")),
    }

    for icon in &report.icons {
        let what = match icon.bytes {
            Some(bytes) => format!("{} ({} bytes)", icon.path.display(), bytes),
            None => icon.path.display().to_string(),
        };
        out.push_str(&status_line(&icon.status, &what));
    }

    if report.is_ready() {
        out.push_str("\nAll required files present! Extension is ready to load.\n");
        out.push_str("\nNext steps:\n");
        out.push_str("1. Open Chrome and go to chrome://extensions/\n");
        out.push_str("2. Enable Developer mode\n");
        out.push_str("3. Click \"Load unpacked\" and select this folder\n");
        out.push_str("4. Test on https://chat.openai.com/\n");
    } else {
        out.push_str(&format!(
            "\n{} problem(s) found. Please check the above list.\n",
            report.problem_count()
        ));
    }

    out
}
