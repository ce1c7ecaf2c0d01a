//! Server Configuration
//!
//! Read from the environment after `.env` has been loaded.

use std::path::PathBuf;

use catalog_core::{Locale, SiteConfig};
use lead_relay::EmailJsConfig;

/// Which relay handles form submissions
#[derive(Clone, Debug)]
pub enum RelayChoice {
    /// Real email delivery
    EmailJs(EmailJsConfig),
    /// Record messages in memory (local development)
    Mock,
    /// Forms answer 503
    Disabled(String),
}

/// Runtime settings for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Directory holding the built front end
    pub static_dir: PathBuf,

    /// Address lead messages are delivered to
    pub lead_destination: String,

    /// Branding passed to the front end
    pub site: SiteConfig,

    pub relay: RelayChoice,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            name: var("SITE_NAME").unwrap_or(defaults.name),
            tagline: var("SITE_TAGLINE").unwrap_or(defaults.tagline),
            contact_email: var("SITE_CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            locale: Locale::En,
        };

        let relay = if var("LEAD_RELAY").as_deref() == Some("mock") {
            RelayChoice::Mock
        } else {
            match EmailJsConfig::from_env() {
                Ok(config) => RelayChoice::EmailJs(config),
                Err(e) => RelayChoice::Disabled(e.to_string()),
            }
        };

        Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
            lead_destination: var("LEAD_DESTINATION_EMAIL")
                .unwrap_or_else(|| site.contact_email.clone()),
            site,
            relay,
        }
    }
}
