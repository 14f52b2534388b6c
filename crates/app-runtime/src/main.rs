//! # Ascor
//!
//! Boots configuration, logging and the seeded container, then reports what
//! was loaded.

use anyhow::{Context, Result};
use tracing::info;

use app_runtime::{init_logging, load_config, AppContainer};

fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_logging(&config.logging).context("Failed to initialise logging")?;

    info!("===========================================");
    info!("  Ascor v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let app = AppContainer::with_mock_data(config).context("Failed to build container")?;

    let summary = app.seeded;
    info!(
        "[runtime] {} circles, {} vaults, {} families, {} listings, {} posts",
        summary.circles, summary.vaults, summary.families, summary.listings, summary.posts
    );
    info!(
        "[runtime] {} notifications ({} unread), {} conversations",
        summary.notifications,
        app.get_unread_count(),
        summary.conversations
    );
    info!(
        "[runtime] {} members, {} learning modules",
        summary.members, summary.modules
    );
    info!(
        "[runtime] {} active circle(s) for {}, business mode {}",
        app.my_circles().len(),
        app.current_user.username,
        if app.shop.business_mode() { "on" } else { "off" }
    );
    Ok(())
}
