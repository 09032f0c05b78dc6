use anyhow::Result;
use clap::Parser;
use depwatch::commands::{WatchOptions, watch};
use depwatch::manifest::DEFAULT_MANIFEST_FILE;
use std::path::PathBuf;

/// depwatch - reverse dependency graph for local packages
///
/// Reads the manifest of a root package and of its local dependency packages,
/// and works out which local packages depend on which.
///
/// Each manifest is backed up next to itself (e.g. `.package.json.bak`)
/// before it is used.
///
/// Examples:
///   depwatch ./app ./packages/ui ./packages/core
///   depwatch --json ./app ./packages/ui
#[derive(Parser, Debug)]
#[command(author, version = env!("DEPWATCH_VERSION"), about)]
struct Cli {
    /// Package directories: the root package first, then its local dependencies
    #[arg(value_name = "LOCATION")]
    locations: Vec<PathBuf>,

    /// Manifest file name inside each package directory
    #[arg(
        long,
        short = 'm',
        env = "DEPWATCH_MANIFEST",
        value_name = "FILE",
        default_value = DEFAULT_MANIFEST_FILE
    )]
    manifest: String,

    /// Also follow devDependencies between local packages
    #[arg(
        long,
        env = "DEPWATCH_INCLUDE_DEV",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    include_dev: bool,

    /// Print the dependency graph as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = depwatch::runtime::RealRuntime;

    let options = WatchOptions {
        manifest: Some(cli.manifest),
        include_dev: cli.include_dev,
        json: cli.json,
    };
    watch(runtime, cli.locations, options).await
}
