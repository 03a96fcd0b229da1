use anyhow::{anyhow, Result};

mod app;
mod config;
mod ui;

fn main() -> Result<()> {
    let config =
        config::json::load_or_default(config::DEFAULT_CONFIG_PATH).map_err(|e| anyhow!(e))?;
    app::logging::init(&config.log_file)?;
    log::info!("starting with regression model '{}'", config.regression);

    app::run::run(config)
}
