use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use hypertension_guide_domain::entities::{BloodPressureLevel, ComprehensiveAdvice, EmergencyStatus};

/// Advice envelope returned to API clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdviceResponse {
    /// Unique identifier for this advice
    pub advice_id: Uuid,

    /// When the advice was generated
    pub generated_at: DateTime<Utc>,

    /// Structured advice from the rule engine
    pub advice: ComprehensiveAdvice,

    /// Plain-text rendering of the advice
    pub report: String,
}

/// A single reading to classify
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[validate(schema(function = "validate_pressure_order"))]
pub struct ClassifyRequest {
    /// Systolic blood pressure in mmHg
    #[validate(range(min = 60.0, max = 300.0, message = "Systolic must be between 60 and 300"))]
    #[schema(example = 150.0)]
    pub systolic: f64,

    /// Diastolic blood pressure in mmHg
    #[validate(range(min = 40.0, max = 200.0, message = "Diastolic must be between 40 and 200"))]
    #[schema(example = 95.0)]
    pub diastolic: f64,
}

fn validate_pressure_order(request: &ClassifyRequest) -> Result<(), ValidationError> {
    if request.diastolic >= request.systolic {
        let mut error = ValidationError::new("pressure_order");
        error.message = Some("Diastolic pressure must be lower than systolic pressure".into());
        return Err(error);
    }
    Ok(())
}

/// Classification of a single reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyResponse {
    pub blood_pressure_level: BloodPressureLevel,

    /// Human-readable level name
    pub label: String,

    pub emergency: EmergencyStatus,
}
