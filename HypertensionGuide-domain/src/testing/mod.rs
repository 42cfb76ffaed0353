// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;

use crate::entities::advice::{ComprehensiveAdvice, EmergencyStatus};
use crate::entities::classification::BloodPressureLevel;
use crate::entities::patient::{Gender, PatientProfile, PatientProfileInput, ProfileValidationError};
use crate::entities::reading::{BloodPressureReading, BloodPressureTrend, TrendDirection};
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::advice::{AdviceService, AdviceServiceError, AdviceServiceTrait};
use crate::services::insights::TrendError;

/// Valid input for a middle-aged patient with grade 1 hypertension
pub fn grade_1_input() -> PatientProfileInput {
    PatientProfileInput {
        age: Some(52),
        gender: Some(Gender::Female),
        systolic_bp: Some(150.0),
        diastolic_bp: Some(95.0),
        height_cm: Some(165.0),
        weight_kg: Some(70.0),
        ..PatientProfileInput::default()
    }
}

/// Valid input for an elderly diabetic patient in hypertensive crisis
pub fn crisis_input() -> PatientProfileInput {
    PatientProfileInput {
        age: Some(68),
        gender: Some(Gender::Male),
        systolic_bp: Some(190.0),
        diastolic_bp: Some(120.0),
        diabetes: true,
        stroke_history: true,
        ..PatientProfileInput::default()
    }
}

/// Mock implementation of the AdviceServiceTrait for testing
///
/// Delegates to the real rule engine unless configured to fail.
#[derive(Debug, Default)]
pub struct MockAdviceService {
    inner: AdviceService,
    should_fail_validation: bool,
    trend: Option<BloodPressureTrend>,
}

impl MockAdviceService {
    /// Create a new mock advice service
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail validation
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Return a fixed trend for any series of at least one reading
    pub fn with_trend(mut self, trend: BloodPressureTrend) -> Self {
        self.trend = Some(trend);
        self
    }
}

impl AdviceServiceTrait for MockAdviceService {
    fn validate_profile(&self, input: PatientProfileInput) -> Result<PatientProfile, AdviceServiceError> {
        if self.should_fail_validation {
            return Err(AdviceServiceError::Validation(ProfileValidationError::InvalidField(
                "Validation failed - mock is configured to fail validation".to_string(),
            )));
        }
        self.inner.validate_profile(input)
    }

    fn generate_advice(&self, patient: &PatientProfile) -> ComprehensiveAdvice {
        self.inner.generate_advice(patient)
    }

    fn assess_reading(&self, systolic: f64, diastolic: f64) -> (BloodPressureLevel, EmergencyStatus) {
        self.inner.assess_reading(systolic, diastolic)
    }

    fn analyze_readings(&self, readings: &[BloodPressureReading]) -> Result<BloodPressureTrend, AdviceServiceError> {
        match &self.trend {
            Some(trend) if !readings.is_empty() => Ok(BloodPressureTrend {
                reading_count: readings.len(),
                ..trend.clone()
            }),
            Some(_) => Err(TrendError::InsufficientData("No readings supplied".to_string()).into()),
            None => self.inner.analyze_readings(readings),
        }
    }
}

/// A stable trend fixture
pub fn stable_trend() -> BloodPressureTrend {
    BloodPressureTrend {
        direction: TrendDirection::Stable,
        systolic_change: 1.0,
        diastolic_change: -0.5,
        recent_average: "131.0/84.5".to_string(),
        previous_average: "130.0/85.0".to_string(),
        reading_count: 0,
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Rule engine component status
    engine_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            engine_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a failing rule engine self-check
    pub fn with_unhealthy_engine(mut self) -> Self {
        self.engine_status = ComponentStatus::Unhealthy;
        self.system_status = SystemStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

impl HealthServiceTrait for MockHealthService {
    fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "rule_engine".to_string(),
            HealthComponent {
                status: self.engine_status,
                details: match self.check_rule_engine_status() {
                    Ok(()) => None,
                    Err(e) => Some(e),
                },
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status,
            components,
        }
    }

    fn check_rule_engine_status(&self) -> Result<(), String> {
        match self.engine_status {
            ComponentStatus::Healthy | ComponentStatus::Degraded => Ok(()),
            ComponentStatus::Unhealthy => Err("Rule engine self-check failed".to_string()),
        }
    }
}
