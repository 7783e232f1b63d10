//! Appeal bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p appeal-bot
//! ```
//!
//! Loads configuration from environment variables (optionally a .env file),
//! applies migrations, and runs the background sweep worker. Interactive
//! traffic is driven by a chat-platform adapter that embeds
//! `appeal-service` and implements the `InteractionSurface` port.

mod surface;

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use appeal_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use appeal_db::PgRequestRepository;
use appeal_identity::HttpIdentityVerifier;
use appeal_service::{ServiceContext, SweepScheduler};

use crate::surface::DetachedSurface;

#[tokio::main]
async fn main() {
    // Run the worker
    if let Err(e) = run().await {
        // Tracing may not be set up yet when configuration loading fails
        error!(error = %e, "appeal bot failed to start");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        max_requests = config.limits.max_requests,
        "configuration loaded"
    );

    // Database pool + schema
    let pool = appeal_db::create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    appeal_db::MIGRATOR
        .run(&pool)
        .await
        .context("failed to apply migrations")?;
    info!("database ready");

    // Dependencies
    let repo = Arc::new(PgRequestRepository::new(pool));
    let verifier = Arc::new(
        HttpIdentityVerifier::from_config(&config.providers)
            .context("failed to build identity provider clients")?,
    );
    let surface = Arc::new(DetachedSurface);

    let ctx = ServiceContext::new(
        repo,
        verifier,
        surface,
        config.limits.clone(),
        config.bot.moderator_role.clone(),
    );

    // Background sweep, first tick immediate
    let sweeper = tokio::spawn(SweepScheduler::new(ctx).run());

    info!("appeal bot running, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("shutting down");
    sweeper.abort();

    Ok(())
}
