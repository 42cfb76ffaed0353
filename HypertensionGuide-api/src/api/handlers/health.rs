use std::sync::{Arc, Once};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

// Use the trait from domain layer
use hypertension_guide_domain::health::{
    create_default_health_service, ComponentStatus as DomainComponentStatus, HealthServiceTrait,
    SystemHealth, SystemStatus,
};

/// Health check response model with system information
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Rule engine self-check status
    pub rule_engine: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
    /// Additional components (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<serde_json::Value>,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Deployment environment name reported by the health endpoint
#[derive(Debug, Clone)]
pub struct AppEnvironment(pub String);

/// Service type for dependency injection
pub type HealthServiceHandle = Arc<dyn HealthServiceTrait>;

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 500, description = "API is not healthy", body = HealthResponse),
        (status = 503, description = "API is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip_all)]
pub async fn health_check(
    Extension(health_service): Extension<HealthServiceHandle>,
    Extension(environment): Extension<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();

    // Calculate uptime if server start time is available
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health();

    let (overall_status, status_code) = match system_health.status {
        SystemStatus::Healthy => ("ok", StatusCode::OK),
        SystemStatus::Degraded => ("degraded", StatusCode::SERVICE_UNAVAILABLE),
        SystemStatus::Unhealthy => ("error", StatusCode::INTERNAL_SERVER_ERROR),
    };

    if status_code != StatusCode::OK {
        warn!(status = overall_status, "Health check reports a problem");
    }

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: component_statuses(&system_health),
        environment: environment.0,
    };

    (status_code, Json(response))
}

fn component_health(system_health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    let component = system_health.components.get(name);
    ComponentHealthStatus {
        status: map_component_status(
            component.map_or(DomainComponentStatus::Healthy, |c| c.status),
        ),
        message: component.and_then(|c| c.details.clone()),
    }
}

/// Map domain components to the API component status
fn component_statuses(system_health: &SystemHealth) -> ComponentStatus {
    let additional: serde_json::Map<String, serde_json::Value> = system_health
        .components
        .iter()
        .filter(|(name, _)| name.as_str() != "rule_engine" && name.as_str() != "api")
        .map(|(name, component)| {
            (
                name.clone(),
                serde_json::json!({
                    "status": map_component_status(component.status),
                    "message": component.details,
                }),
            )
        })
        .collect();

    ComponentStatus {
        rule_engine: component_health(system_health, "rule_engine"),
        api: component_health(system_health, "api"),
        additional: (!additional.is_empty()).then(|| additional.into()),
    }
}

/// Map domain component status to API status string
fn map_component_status(status: DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
    .to_string()
}

/// Factory function to create a health service
pub fn create_health_service() -> HealthServiceHandle {
    Arc::new(create_default_health_service())
}
