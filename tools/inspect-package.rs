//! Inspect package descriptors
//!
//! Loads the `package.json` of one or more package roots and prints the
//! normalized metadata as JSON.
//!
//! Usage:
//!   inspect-package [--config <file>] [--base-dir <dir>] [--log-filter <filter>] [--compact] <root>...

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use lsd_metadata::config::LoaderConfig;
use lsd_metadata::package::PackageMetadataLoader;
use lsd_metadata::resolution::FileSystemResolutionContext;
use lsd_metadata::utils::init_logging_from_config;

#[derive(Parser, Debug)]
#[command(name = "inspect-package", version, about = "Load and print package metadata")]
struct Args {
    /// Package root directories
    #[arg(required = true)]
    roots: Vec<String>,

    /// Loader configuration file (.json or .toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory relative package roots are resolved against
    #[arg(long)]
    base_dir: Option<String>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn load_config(args: &Args) -> anyhow::Result<LoaderConfig> {
    let mut config = match args.config {
        Some(ref path) => LoaderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LoaderConfig::default(),
    };

    if let Some(ref base_dir) = args.base_dir {
        config.resolution.base_dir = Some(base_dir.clone());
    }
    if let Some(ref filter) = args.log_filter {
        config.logging.get_or_insert_with(Default::default).filter = Some(filter.clone());
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging_from_config(config.logging.as_ref());

    let context = FileSystemResolutionContext::from_config(&config.resolution);
    let loader = PackageMetadataLoader::new(Arc::new(context));

    let results = loader.load_many(&args.roots).await;

    let mut failures = 0usize;
    for (root, result) in args.roots.iter().zip(results) {
        match result {
            Ok(metadata) => {
                let rendered = if args.compact {
                    serde_json::to_string(&metadata)?
                } else {
                    serde_json::to_string_pretty(&metadata)?
                };
                println!("{}", rendered);
            }
            Err(e) => {
                warn!("Failed to load package {}: {}", root, e);
                eprintln!("error: {}: {}", root, e);
                failures += 1;
            }
        }
    }

    info!(
        "Loaded {} of {} packages",
        args.roots.len() - failures,
        args.roots.len()
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
