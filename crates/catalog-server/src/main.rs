//! agent-showcase HTTP Server
//!
//! Axum-based server providing the catalog REST API, the lead-form relay
//! endpoints, and static hosting for the WASM front end.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_core::{Catalog, MessageRelay};
use lead_relay::{EmailJsClient, MockRelay};

use crate::config::{RelayChoice, ServerConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before tracing so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Catalog
    let catalog = Catalog::builtin().clone();
    tracing::info!("Loaded {} agents:", catalog.len());
    for count in catalog.category_counts() {
        tracing::info!("  • {} ({})", count.label, count.count);
    }

    // Email relay
    let relay: Option<Arc<dyn MessageRelay>> = match config.relay.clone() {
        RelayChoice::EmailJs(emailjs) => {
            let client = EmailJsClient::new(emailjs)?;
            tracing::info!("✓ EmailJS relay configured");
            Some(Arc::new(client))
        }
        RelayChoice::Mock => {
            tracing::warn!("⚠ Using mock relay - form messages are only logged");
            Some(Arc::new(MockRelay::new()))
        }
        RelayChoice::Disabled(reason) => {
            tracing::warn!("⚠ Email relay not configured - forms disabled ({})", reason);
            tracing::warn!("  Set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY in .env");
            None
        }
    };
    tracing::info!("Lead messages go to {}", config.lead_destination);

    // Build application state
    let state = AppState {
        catalog: Arc::new(catalog),
        site: Arc::new(config.site.clone()),
        relay,
        lead_destination: Arc::from(config.lead_destination.as_str()),
    };

    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 {} running on http://{}", config.site.name, config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  GET  /api/site              - Site configuration");
    tracing::info!("  GET  /api/categories        - Categories with counts");
    tracing::info!("  GET  /api/agents            - Filtered listing (?q=&category=)");
    tracing::info!("  GET  /api/agents/featured   - Featured agents");
    tracing::info!("  GET  /api/agents/{{id}}       - Agent details");
    tracing::info!("  POST /api/contact           - Contact form");
    tracing::info!("  POST /api/submissions       - Agent submission form");
    tracing::info!("  Static front end from {}", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
