//! HTTP server entry point.
//!
//! Reads [`ServerSettings`] from the environment, loads the event catalog
//! and serves the game until `Ctrl-C`.

use std::sync::Arc;

use stem_life_core::server::{start_server, AppState};
use stem_life_core::{Catalog, ServerSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServerSettings::from_env()?;
    init_tracing(settings.json_logs);

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };
    let source = settings
        .catalog_path
        .as_ref()
        .map_or_else(|| "bundled".to_string(), |p| p.display().to_string());
    info!(events = catalog.len(), source = %source, "catalog loaded");

    let state = Arc::new(AppState::with_catalog(Arc::new(catalog), settings.max_aging_steps));
    start_server(&settings, state).await?;

    Ok(())
}
