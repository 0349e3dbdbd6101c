//! Logging setup using tracing
//!
//! Logs go to stderr so stdout stays clean for reports (`--format json`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `--verbose` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "promptree_icons=info,warn";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("promptree_icons=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber
pub fn init(verbose: bool, json: bool) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }

    tracing::debug!("Logging initialized (verbose={}, json={})", verbose, json);
    Ok(())
}
