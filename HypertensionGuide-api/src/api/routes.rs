use axum::{
    http::{header, Method},
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::api::handlers::advice::{self, AdviceServiceHandle};
use crate::api::handlers::health::{self, AppEnvironment, HealthServiceHandle};
use crate::config::ApiConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the default services
pub fn create_app(config: &ApiConfig) -> Router {
    create_app_with_services(
        advice::create_service(),
        health::create_health_service(),
        &config.environment,
    )
}

/// Create the application router around the given services
pub fn create_app_with_services(
    advice_service: AdviceServiceHandle,
    health_service: HealthServiceHandle,
    environment: &str,
) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/advice", post(advice::create_advice))
        .route("/assessment/classify", post(advice::classify_reading))
        .route("/readings/trend", post(advice::analyze_reading_trend));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(AppEnvironment(environment.to_string())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(advice_service);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(cors).layer(TraceLayer::new_for_http())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
