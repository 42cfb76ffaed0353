use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Advice endpoints
        crate::api::handlers::advice::create_advice,
        crate::api::handlers::advice::classify_reading,
        crate::api::handlers::advice::analyze_reading_trend,
    ),
    components(
        schemas(
            // Envelopes
            crate::entities::advice::AdviceResponse,
            crate::entities::advice::ClassifyRequest,
            crate::entities::advice::ClassifyResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,

            // Domain input and readings
            hypertension_guide_domain::entities::PatientProfileInput,
            hypertension_guide_domain::entities::Gender,
            hypertension_guide_domain::entities::BloodPressureReading,
            hypertension_guide_domain::entities::BloodPressureTrend,
            hypertension_guide_domain::entities::TrendDirection,

            // Domain advice
            hypertension_guide_domain::entities::ComprehensiveAdvice,
            hypertension_guide_domain::entities::Assessment,
            hypertension_guide_domain::entities::BloodPressureLevel,
            hypertension_guide_domain::entities::RiskLevel,
            hypertension_guide_domain::entities::TargetBloodPressure,
            hypertension_guide_domain::entities::MedicationRecommendation,
            hypertension_guide_domain::entities::DrugRecommendation,
            hypertension_guide_domain::entities::DrugClass,
            hypertension_guide_domain::entities::MonitoringPlan,
            hypertension_guide_domain::entities::EmergencyStatus,
            hypertension_guide_domain::entities::UrgencyLevel,
            hypertension_guide_domain::entities::advice::BasicAssessment,
            hypertension_guide_domain::entities::advice::RiskAssessment,
            hypertension_guide_domain::entities::advice::TenYearRiskEstimate,
            hypertension_guide_domain::entities::advice::TenYearRiskBand,
            hypertension_guide_domain::entities::advice::LifestyleIntervention,
            hypertension_guide_domain::entities::advice::InterventionCategory,
            hypertension_guide_domain::entities::advice::InterventionPriority,
            hypertension_guide_domain::entities::advice::EvidenceLevel,
            hypertension_guide_domain::entities::advice::BloodPressureMonitoring,
            hypertension_guide_domain::entities::advice::FollowUpSchedule,
            hypertension_guide_domain::entities::advice::FraminghamScore,
            hypertension_guide_domain::entities::patient::BmiCategory,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "advice", description = "Hypertension assessment and advice endpoints")
    ),
    info(
        title = "HypertensionGuide API",
        version = "0.1.0",
        description = "Rule-based hypertension assessment, risk stratification and management advice",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
