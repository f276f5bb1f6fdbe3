//! cpy-deploy CLI
//!
//! Usage: cpy-deploy [OPTIONS] <SCRIPT> [LIBDIR] [DEVICE]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpy_deploy::config;
use cpy_deploy::domain::ports::{DeployEvent, FileSystem};
use cpy_deploy::error::DeployError;
use cpy_deploy::infrastructure::LocalFs;
use cpy_deploy::presentation::{factory, render_banner, Cli};
use cpy_deploy::{DeployOptions, Destination};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !cli.json {
        print!("{}", render_banner(env!("CARGO_PKG_VERSION")));
    }

    let sink = factory::create_event_sink(cli.json);
    let (options, destination) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            if cli.json {
                sink.on_event(DeployEvent::Failed {
                    error: format!("{:#}", e),
                });
            }
            return Err(e);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    }) {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
    }

    let use_case = factory::create_deploy_use_case(running);
    use_case
        .execute_with_events(&options, &destination, sink.as_ref())
        .with_context(|| format!("deployment to {} failed", destination.path().display()))?;

    Ok(())
}

/// Load configuration and pick the destination; nothing is copied yet.
fn prepare(cli: &Cli) -> Result<(DeployOptions, Destination)> {
    let fs = LocalFs::new();
    if !fs.is_file(&cli.script) {
        return Err(DeployError::ScriptNotFound {
            path: cli.script.clone(),
        }
        .into());
    }

    let loaded = config::load(cli.load_request()).context("failed to load configuration")?;
    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }
    for source in &loaded.sources {
        tracing::info!(path = %source.display(), "using descriptor");
    }
    let config = loaded.config;

    let options = DeployOptions::from_config(&cli.script, &config)
        .context("invalid deployment settings")?
        .with_dry_run(cli.dry_run);

    let destination = factory::create_path_resolver(&config)
        .resolve(&fs, &config.device)
        .map_err(DeployError::from)
        .context("invalid deployment settings")?;

    Ok((options, destination))
}
