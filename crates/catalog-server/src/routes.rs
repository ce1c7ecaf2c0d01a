//! Router Assembly

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    featured_agents, get_agent, health_check, list_agents, list_categories, site_info,
    submit_agent, submit_contact,
};
use crate::state::AppState;

/// Build the application router.
///
/// Unknown paths fall through to the static front end; its `index.html`
/// answers every client-side route, including the not-found page.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/site", get(site_info))

        // Catalog
        .route("/api/categories", get(list_categories))
        .route("/api/agents", get(list_agents))
        .route("/api/agents/featured", get(featured_agents))
        .route("/api/agents/{id}", get(get_agent))

        // Lead forms
        .route("/api/contact", post(submit_contact))
        .route("/api/submissions", post(submit_agent))

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use catalog_core::{Catalog, MessageRelay, SiteConfig};
    use lead_relay::MockRelay;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_with(relay: Option<Arc<MockRelay>>) -> AppState {
        AppState {
            catalog: Arc::new(Catalog::builtin().clone()),
            site: Arc::new(SiteConfig::default()),
            relay: relay.map(|r| r as Arc<dyn MessageRelay>),
            lead_destination: Arc::from("leads@example.com"),
        }
    }

    fn app(state: AppState) -> Router {
        router(state, Path::new("static"))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn contact_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "",
            "message": "I'd like a demo of Insight Analyst."
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(state_with(None)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["relay_configured"], false);
    }

    #[tokio::test]
    async fn test_list_all_agents() {
        let (status, body) = get_json(app(state_with(None)), "/api/agents").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], Catalog::builtin().len());
        assert_eq!(body["no_results"], false);
    }

    #[tokio::test]
    async fn test_filter_by_category_and_search() {
        let (status, body) = get_json(
            app(state_with(None)),
            "/api/agents?q=REVIEW&category=software-development",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["entries"][0]["id"], "code-reviewer");
    }

    #[tokio::test]
    async fn test_no_results() {
        let (status, body) = get_json(app(state_with(None)), "/api/agents?q=zzzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["no_results"], true);
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let (status, body) = get_json(app(state_with(None)), "/api/agents?category=gardening").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_CATEGORY");
    }

    #[tokio::test]
    async fn test_featured_and_lookup() {
        let (_, featured) = get_json(app(state_with(None)), "/api/agents/featured").await;
        assert_eq!(featured.as_array().map(Vec::len), Some(Catalog::builtin().featured().len()));

        let (status, entry) = get_json(app(state_with(None)), "/api/agents/ledger-bot").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(entry["category"], "finance-operations");

        let (status, body) = get_json(app(state_with(None)), "/api/agents/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "UNKNOWN_AGENT");
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) = get_json(app(state_with(None)), "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(6));
        assert_eq!(body[0]["slug"], "customer-support");
    }

    #[tokio::test]
    async fn test_contact_is_relayed() {
        let relay = Arc::new(MockRelay::new());
        let (status, body) = post_json(
            app(state_with(Some(relay.clone()))),
            "/api/contact",
            contact_body(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sent");
        let sent = relay.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "leads@example.com");
        assert_eq!(sent[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_invalid_contact() {
        let relay = Arc::new(MockRelay::new());
        let mut body = contact_body();
        body["email"] = serde_json::json!("nope");

        let (status, response) =
            post_json(app(state_with(Some(relay.clone()))), "/api/contact", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response["code"], "INVALID_FORM");
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_relay_failure() {
        let relay = Arc::new(MockRelay::failing());
        let (status, body) =
            post_json(app(state_with(Some(relay))), "/api/contact", contact_body()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "RELAY_FAILED");
    }

    #[tokio::test]
    async fn test_relay_disabled() {
        let (status, body) = post_json(app(state_with(None)), "/api/contact", contact_body()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "RELAY_DISABLED");
    }

    #[tokio::test]
    async fn test_agent_submission() {
        let relay = Arc::new(MockRelay::new());
        let (status, _) = post_json(
            app(state_with(Some(relay.clone()))),
            "/api/submissions",
            serde_json::json!({
                "name": "Grace",
                "email": "grace@example.com",
                "agent_name": "Bug Hunter",
                "category": "software-development",
                "description": "Finds bugs before your users do."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(relay.sent()[0].subject, "Agent submission: Bug Hunter");
    }

    #[tokio::test]
    async fn test_invalid_agent_submission() {
        let relay = Arc::new(MockRelay::new());
        let (status, body) = post_json(
            app(state_with(Some(relay.clone()))),
            "/api/submissions",
            serde_json::json!({
                "name": "Grace",
                "email": "grace@example.com",
                "agent_name": "",
                "description": "Finds bugs before your users do."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_FORM");
        assert_eq!(body["error"], "Please fill in the agent name field.");
        assert!(relay.sent().is_empty());
    }
}
