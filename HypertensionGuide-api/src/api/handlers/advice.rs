use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

// Import domain entities and services
use hypertension_guide_domain::entities::{
    BloodPressureReading, BloodPressureTrend, PatientProfileInput,
};
use hypertension_guide_domain::services::{
    create_default_advice_service, render_advice, AdviceServiceTrait,
};

// Import our entities
use crate::entities::advice::{AdviceResponse, ClassifyRequest, ClassifyResponse};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type AdviceServiceHandle = Arc<dyn AdviceServiceTrait>;

/// Create a default service for the handlers to use
pub fn create_service() -> AdviceServiceHandle {
    Arc::new(create_default_advice_service())
}

/// Flatten `validator` errors into "field: message" pairs
fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Generate comprehensive hypertension advice for a patient
#[utoipa::path(
    post,
    path = "/api/v1/advice",
    request_body = PatientProfileInput,
    responses(
        (status = 200, description = "Advice generated", body = AdviceResponse),
        (status = 400, description = "Invalid patient data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "advice"
)]
#[instrument(skip(service, input))]
pub async fn create_advice(
    State(service): State<AdviceServiceHandle>,
    Json(input): Json<PatientProfileInput>,
) -> Result<impl IntoResponse, ErrorResponse> {
    info!("Generating hypertension advice");

    let advice = service.generate_advice_from_input(input).map_err(|e| {
        warn!("Invalid patient data: {}", e);
        ErrorResponse::from(e)
    })?;

    let response = AdviceResponse {
        advice_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        report: render_advice(&advice),
        advice,
    };

    info!(advice_id = %response.advice_id, "Advice generated");
    Ok((StatusCode::OK, Json(response)))
}

/// Classify a single blood pressure reading and check it for a crisis
#[utoipa::path(
    post,
    path = "/api/v1/assessment/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Reading classified", body = ClassifyResponse),
        (status = 400, description = "Invalid reading", body = ErrorResponse),
    ),
    tag = "advice"
)]
#[instrument(skip(service))]
pub async fn classify_reading(
    State(service): State<AdviceServiceHandle>,
    Json(request): Json<ClassifyRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    if let Err(errors) = request.validate() {
        let message = describe_validation_errors(&errors);
        warn!("Invalid blood pressure reading: {}", message);
        return Err(ErrorResponse::validation_error(&message, None));
    }

    let (level, emergency) = service.assess_reading(request.systolic, request.diastolic);
    if emergency.is_emergency {
        warn!(systolic = request.systolic, diastolic = request.diastolic, "Crisis reading submitted");
    }

    Ok(Json(ClassifyResponse {
        blood_pressure_level: level,
        label: level.label().to_string(),
        emergency,
    }))
}

/// Compare the latest week of readings with the week before
#[utoipa::path(
    post,
    path = "/api/v1/readings/trend",
    request_body = Vec<BloodPressureReading>,
    responses(
        (status = 200, description = "Trend computed", body = BloodPressureTrend),
        (status = 422, description = "Not enough readings for a trend", body = ErrorResponse),
    ),
    tag = "advice"
)]
#[instrument(skip_all)]
pub async fn analyze_reading_trend(
    State(service): State<AdviceServiceHandle>,
    Json(readings): Json<Vec<BloodPressureReading>>,
) -> Result<Json<BloodPressureTrend>, ErrorResponse> {
    info!("Analyzing trend across {} readings", readings.len());

    let trend = service.analyze_readings(&readings).map_err(|e| {
        info!("Trend unavailable: {}", e);
        ErrorResponse::from(e)
    })?;

    Ok(Json(trend))
}
