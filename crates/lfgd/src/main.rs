//! lfgd — the LFG dungeon-queue simulator daemon.
//!
//! Single binary that assembles the simulator:
//! - Configuration (lfg.toml, with interactive prompts for missing values)
//! - Role roster and instance pool
//! - Admission scheduler
//! - Status and summary reporting
//!
//! # Usage
//!
//! ```text
//! lfgd --config lfg.toml
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use lfg_core::RawConfig;
use lfg_runtime::InstancePool;
use lfg_scheduler::{AdmissionScheduler, RoleRoster};

mod prompt;
mod report;

#[derive(Parser)]
#[command(name = "lfgd", about = "LFG dungeon-queue simulator")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "lfg.toml")]
    config: PathBuf,

    /// Re-poll interval while the queue cannot form a party, in milliseconds.
    #[arg(long, default_value = "100")]
    poll_interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lfgd=debug,lfg_scheduler=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    // Salvage whatever the config file provides, prompt for the rest.
    let raw = match RawConfig::from_file(&cli.config) {
        Ok(raw) => raw.salvage(),
        Err(e) => {
            warn!(path = ?cli.config, error = %e, "could not read config file, falling back to prompts");
            RawConfig::default()
        }
    };
    let stdin = std::io::stdin();
    let config = prompt::complete_config(raw, &mut stdin.lock(), &mut std::io::stdout())?;

    let roster = Arc::new(RoleRoster::new(config.initial_queue()));
    let pool = Arc::new(InstancePool::new(config.max_instances));

    report::print_input_values(&config);
    report::print_status(&pool, &roster).await;

    let scheduler = AdmissionScheduler::new(roster.clone(), pool.clone(), config.clear_range())
        .with_poll_interval(Duration::from_millis(cli.poll_interval_ms))
        .with_admission_callback({
            let pool = pool.clone();
            let roster = roster.clone();
            Arc::new(move |id| {
                let pool = pool.clone();
                let roster = roster.clone();
                Box::pin(async move {
                    println!("\n> Party entering instance {id}");
                    report::print_status(&pool, &roster).await;
                })
            })
        });
    let scheduler = Arc::new(scheduler);

    // Ctrl-C stops admission; in-flight parties still finish.
    tokio::spawn({
        let scheduler = scheduler.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
                scheduler.request_shutdown();
            }
        }
    });

    scheduler.run().await;

    report::print_summary(&pool, &roster).await;
    Ok(())
}
