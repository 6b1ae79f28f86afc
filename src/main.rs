//! nun - npm update notifier CLI tool
//!
//! Checks package.json files for outdated dependencies once, or repeatedly
//! with `--interval`, and reports them on the console or as desktop
//! notifications.

use clap::Parser;
use nun::cli::CliArgs;
use nun::config::Settings;
use nun::cycle::CycleDriver;
use nun::manifest::resolve_manifests;
use nun::notify::create_notifier;
use nun::registry::{HttpClient, NpmAdapter, VersionOracle};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    let settings = Settings::from_cli(&args);

    init_logging(&settings);

    for value in args.stray_interval_values() {
        tracing::warn!(
            "'{}' is treated as a file; pass an interval as --interval={}",
            value.display(),
            value.display()
        );
    }

    match run(args, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `NUN_LOG`
fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NUN_LOG")
                .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs, settings: Settings) -> anyhow::Result<()> {
    let manifests = resolve_manifests(&args.paths)?;
    tracing::debug!("watching {} manifest(s)", manifests.len());

    let oracle: Arc<dyn VersionOracle> = Arc::new(NpmAdapter::new(HttpClient::new()?));
    let notifier = create_notifier(settings.sink, settings.color);
    let driver = Arc::new(
        CycleDriver::new(manifests, oracle, notifier).with_progress(settings.show_progress),
    );

    match settings.interval {
        Some(interval) => driver.run_forever(interval).await?,
        None => {
            driver.run_once().await;
        }
    }

    Ok(())
}
