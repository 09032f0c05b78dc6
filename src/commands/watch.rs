use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::{
    application::setup_state,
    diagnostics::LogSink,
    runtime::Runtime,
    watch::PackageWatcher,
};

use super::config::{Config, WatchOptions};

/// Analyse the packages at `locations` and hand the result to the watcher.
#[tracing::instrument(skip(runtime, options))]
pub async fn watch<R: Runtime>(
    runtime: R,
    locations: Vec<PathBuf>,
    options: WatchOptions,
) -> Result<()> {
    let config = Config::new(runtime, options);
    run(&locations, config).await
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, W: PackageWatcher>(
    locations: &[PathBuf],
    config: Config<R, W>,
) -> Result<()> {
    let state = setup_state(&config.runtime, locations, &config.setup, &LogSink).await?;

    if config.json {
        let json = serde_json::to_string_pretty(&state).context("Failed to serialize run state")?;
        println!("{}", json);
    }

    let mut subscription = config.watcher.subscribe(&state).await?;
    while let Some(event) = subscription.next().await {
        info!("{:?}", event);
    }

    Ok(())
}
