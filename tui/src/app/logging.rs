use std::{fs::OpenOptions, path::Path};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Sends `log` output to `path` so it never draws over the terminal UI.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
