//! API Client

use catalog_core::{AgentSubmissionForm, ContactForm};
use serde::Serialize;

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

/// POST a form and map any failure to a displayable message
async fn post_form<T: Serialize>(path: &str, form: &T) -> Result<(), String> {
    let response = reqwest::Client::new()
        .post(api_url(path))
        .json(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}

/// Relay the contact form through the server
pub async fn send_contact(form: &ContactForm) -> Result<(), String> {
    post_form("/api/contact", form).await
}

/// Relay an agent submission through the server
pub async fn send_submission(form: &AgentSubmissionForm) -> Result<(), String> {
    post_form("/api/submissions", form).await
}
