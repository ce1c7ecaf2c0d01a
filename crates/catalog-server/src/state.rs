//! Application State

use std::sync::Arc;

use catalog_core::{Catalog, MessageRelay, SiteConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only agent catalog
    pub catalog: Arc<Catalog>,

    /// Branding and contact details
    pub site: Arc<SiteConfig>,

    /// Email relay (optional - None if not configured)
    pub relay: Option<Arc<dyn MessageRelay>>,

    /// Where lead messages are delivered
    pub lead_destination: Arc<str>,
}
