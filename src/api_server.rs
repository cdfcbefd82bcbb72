use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use anyhow::{anyhow, Result};
use log::{debug, info};
use tokio::net::TcpListener;

use crate::calendar::{CalendarEntry, CalendarProvider};
use crate::config::Config;
use crate::presentation::{present_day, present_invitation, present_wedding, DayView, InvitationView};
use crate::share::{EventFilter, ShareSelection};

// Read-only state shared across handlers
pub struct ApiState {
    pub config: Config,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub events: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub events: Option<String>,
    pub base: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub provider: CalendarProvider,
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ShareResponse {
    pub link: String,
    pub events: Vec<String>,
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub provider: &'static str,
    pub link: String,
    #[serde(flatten)]
    pub entry: CalendarEntry,
}

type ApiError = (StatusCode, Json<ApiResponse>);

fn not_found(message: String) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse {
            success: false,
            message,
        }),
    )
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_days_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Json<Vec<DayView>> {
    let wedding = &state.config.wedding;
    let filter = EventFilter::from_param(&wedding.share_ids(), query.events.as_deref());
    debug!("Listing days with filter {:?}", filter);
    Json(present_wedding(wedding, &filter))
}

async fn invitation_handler(State(state): State<Arc<ApiState>>) -> Json<InvitationView> {
    Json(present_invitation(&state.config.wedding))
}

async fn day_handler(
    State(state): State<Arc<ApiState>>,
    Path(index): Path<usize>,
) -> Result<Json<DayView>, ApiError> {
    state
        .config
        .wedding
        .day(index)
        .map(|day| Json(present_day(day)))
        .ok_or_else(|| not_found(format!("No event day at index {}", index)))
}

async fn calendar_handler(
    State(state): State<Arc<ApiState>>,
    Path((day_index, event_index)): Path<(usize, usize)>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, ApiError> {
    let day = state
        .config
        .wedding
        .day(day_index)
        .ok_or_else(|| not_found(format!("No event day at index {}", day_index)))?;
    let event = day.events.get(event_index).ok_or_else(|| {
        not_found(format!("Day {} has no event at index {}", day_index, event_index))
    })?;

    let entry = CalendarEntry::new(day, event);
    Ok(Json(CalendarResponse {
        provider: match query.provider {
            CalendarProvider::Google => "google",
            CalendarProvider::Ics => "ics",
        },
        link: entry.link(query.provider),
        entry,
    }))
}

async fn share_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ShareQuery>,
) -> Json<ShareResponse> {
    let selection = ShareSelection::for_wedding(&state.config.wedding)
        .with_ids(query.events.as_deref().unwrap_or("").split(','));
    let base = query.base.as_deref().unwrap_or(&state.config.site.base_url);
    Json(ShareResponse {
        link: selection.link(base),
        events: selection.ids().to_vec(),
    })
}

pub fn router(config: Config) -> Router {
    let state = Arc::new(ApiState { config });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/invitation", get(invitation_handler))
        .route("/days", get(list_days_handler))
        .route("/days/{index}", get(day_handler))
        .route("/days/{day}/events/{event}/calendar", get(calendar_handler))
        .route("/share", get(share_handler))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, config: Config) -> Result<()> {
    let app = router(config);
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Failed to start API server: {}", e))?;
    Ok(())
}

pub async fn start_api_server(config: Config, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow!("Failed to bind to address {}: {}", addr, e))?;

    info!("API server listening on http://{}", listener.local_addr()?);

    serve(listener, config).await
}
