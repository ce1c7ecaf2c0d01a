//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AgentSubmissionForm, CatalogEntry, CategoryCount, Category, ContactForm, FilterState,
    FormController, LeadForm, Notice, SiteConfig, SubmitOutcome,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub agents: usize,
    pub relay_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct AgentQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AgentListResponse {
    pub entries: Vec<CatalogEntry>,
    pub total: usize,
    pub no_results: bool,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        agents: state.catalog.len(),
        relay_configured: state.relay.is_some(),
    })
}

/// Site branding for the front end
pub async fn site_info(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.site.as_ref().clone())
}

/// Categories with entry counts
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    Json(state.catalog.category_counts())
}

/// Filtered catalog listing
pub async fn list_agents(
    State(state): State<AppState>,
    Query(query): Query<AgentQuery>,
) -> Result<Json<AgentListResponse>, ApiError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<Category>().map_err(|e| {
            api_error(StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY", e.user_message())
        })?),
    };

    let filter = FilterState::new(query.q.unwrap_or_default(), category);
    let outcome = state.catalog.filter(&filter);
    let entries: Vec<CatalogEntry> = outcome.entries().iter().map(|e| (*e).clone()).collect();

    tracing::debug!(search = %filter.search, category = ?filter.category, hits = entries.len(), "catalog filtered");

    Ok(Json(AgentListResponse {
        total: entries.len(),
        no_results: outcome.is_empty(),
        entries,
    }))
}

/// Featured set shown in the carousel
pub async fn featured_agents(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.featured().into_iter().cloned().collect())
}

/// Single catalog entry
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogEntry>, ApiError> {
    state
        .catalog
        .require(&id)
        .map(|entry| Json(entry.clone()))
        .map_err(|e| api_error(StatusCode::NOT_FOUND, "UNKNOWN_AGENT", e.user_message()))
}

/// Contact form relay
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmitResponse>, ApiError> {
    relay_form(&state, form).await
}

/// Agent submission form relay
pub async fn submit_agent(
    State(state): State<AppState>,
    Json(form): Json<AgentSubmissionForm>,
) -> Result<Json<SubmitResponse>, ApiError> {
    relay_form(&state, form).await
}

async fn relay_form<F>(state: &AppState, form: F) -> Result<Json<SubmitResponse>, ApiError>
where
    F: LeadForm + Send + Sync,
{
    let relay = state.relay.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "RELAY_DISABLED",
            "Messaging is not available right now.",
        )
    })?;

    let mut controller = FormController::with_fields(form);
    let outcome = controller
        .submit(relay.as_ref(), &state.lead_destination)
        .await;
    let notice = controller.take_notices().pop();

    match (outcome, notice) {
        (SubmitOutcome::Sent, _) => {
            tracing::info!(form = ?F::KIND, relay = relay.name(), "lead form relayed");
            Ok(Json(SubmitResponse {
                status: "sent",
                message: Notice::Sent.text(),
            }))
        }
        (SubmitOutcome::Blocked, Some(Notice::Invalid(err))) => Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_FORM",
            err.to_string(),
        )),
        (SubmitOutcome::Blocked, _) => Err(api_error(
            StatusCode::CONFLICT,
            "SUBMIT_IN_PROGRESS",
            "A submission is already in progress.",
        )),
        (SubmitOutcome::Failed, notice) => {
            tracing::error!(form = ?F::KIND, relay = relay.name(), "lead form relay failed");
            Err(api_error(
                StatusCode::BAD_GATEWAY,
                "RELAY_FAILED",
                notice.map_or_else(|| Notice::Failed(String::new()).text(), |n| n.text()),
            ))
        }
    }
}
