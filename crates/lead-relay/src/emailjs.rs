//! EmailJS Integration
//!
//! Sends lead messages through the EmailJS REST API using a configured
//! service and template.

use async_trait::async_trait;
use catalog_core::{CatalogError, MessageRelay, OutboundMessage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{RelayError, Result};

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

/// EmailJS account settings
#[derive(Clone, Debug)]
pub struct EmailJsConfig {
    /// API base URL
    pub endpoint: String,

    /// Email service identifier
    pub service_id: String,

    /// Template identifier
    pub template_id: String,

    /// Public key (sent as `user_id`)
    pub public_key: String,

    /// Private key, required when the account enforces it for REST calls
    pub private_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            private_key: None,
            timeout_secs: 15,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| RelayError::Config(format!("{name} not set")))
        };

        let mut config = Self::new(
            var("EMAILJS_SERVICE_ID")?,
            var("EMAILJS_TEMPLATE_ID")?,
            var("EMAILJS_PUBLIC_KEY")?,
        );
        config.private_key = var("EMAILJS_PRIVATE_KEY").ok();
        if let Ok(endpoint) = var("EMAILJS_ENDPOINT") {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Full URL of the send endpoint
    pub fn send_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SEND_PATH)
    }
}

/// Variables substituted into the email template
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
    pub subject: String,
    pub form: String,
}

impl From<&OutboundMessage> for TemplateParams {
    fn from(message: &OutboundMessage) -> Self {
        let form = serde_json::to_value(message.kind)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        Self {
            from_name: message.from_name.clone(),
            reply_to: message.reply_to.clone(),
            phone: message.phone.clone(),
            message: message.message.clone(),
            to_email: message.to_email.clone(),
            subject: message.subject.clone(),
            form,
        }
    }
}

/// Body of the send request
#[derive(Clone, Debug, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: TemplateParams,
}

impl EmailJsRequest {
    pub fn new(config: &EmailJsConfig, message: &OutboundMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            access_token: config.private_key.clone(),
            template_params: TemplateParams::from(message),
        }
    }
}

/// EmailJS REST client
pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(EmailJsConfig::from_env()?)
    }

    pub const fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// Deliver one message
    pub async fn deliver(&self, message: &OutboundMessage) -> Result<()> {
        let request = EmailJsRequest::new(&self.config, message);

        let response = self
            .http
            .post(self.config.send_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(form = ?message.kind, "lead message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "email service rejected message");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl MessageRelay for EmailJsClient {
    async fn send(&self, message: &OutboundMessage) -> catalog_core::Result<()> {
        self.deliver(message).await.map_err(CatalogError::from)
    }

    fn name(&self) -> &str {
        "emailjs"
    }
}
