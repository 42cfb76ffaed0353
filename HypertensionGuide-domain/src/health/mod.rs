//! Domain layer health check functionality
//! The engine has no external dependencies, so health means the guideline tables
//! still produce the known answers for a fixed set of readings.

use std::collections::HashMap;

use crate::entities::classification::BloodPressureLevel;
use crate::rules::{check_emergency, classify_blood_pressure};

/// System health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    fn get_system_health(&self) -> SystemHealth;

    /// Run the rule engine self-check
    /// Returns an error naming the first fixture that produced the wrong answer
    fn check_rule_engine_status(&self) -> Result<(), String>;
}

const CLASSIFICATION_FIXTURES: [(f64, f64, BloodPressureLevel); 3] = [
    (110.0, 70.0, BloodPressureLevel::Normal),
    (150.0, 95.0, BloodPressureLevel::Grade1),
    (190.0, 120.0, BloodPressureLevel::Grade3),
];

/// Run known readings through the classifier and the crisis check
pub fn check_rule_engine_status() -> Result<(), String> {
    for (systolic, diastolic, expected) in CLASSIFICATION_FIXTURES {
        let actual = classify_blood_pressure(systolic, diastolic);
        if actual != expected {
            return Err(format!(
                "Classifier returned {} for {}/{}, expected {}",
                actual, systolic, diastolic, expected
            ));
        }
    }

    if !check_emergency(190.0, 120.0).is_emergency || check_emergency(120.0, 80.0).is_emergency {
        return Err("Emergency check disagrees with the crisis thresholds".to_string());
    }

    Ok(())
}

/// Fold component states into one system state
pub fn overall_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    components
        .into_iter()
        .fold(SystemStatus::Healthy, |status, component| match (status, component.status) {
            (_, ComponentStatus::Unhealthy) | (SystemStatus::Unhealthy, _) => SystemStatus::Unhealthy,
            (_, ComponentStatus::Degraded) | (SystemStatus::Degraded, _) => SystemStatus::Degraded,
            _ => SystemStatus::Healthy,
        })
}

/// Get overall system health
pub fn get_system_health() -> SystemHealth {
    let engine_component = match check_rule_engine_status() {
        Ok(()) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    let components: HashMap<String, HealthComponent> =
        vec![("rule_engine".to_string(), engine_component)].into_iter().collect();

    SystemHealth {
        status: overall_status(components.values()),
        components,
    }
}

/// Health service backed by the engine self-check
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHealthService;

impl HealthServiceTrait for DefaultHealthService {
    fn get_system_health(&self) -> SystemHealth {
        get_system_health()
    }

    fn check_rule_engine_status(&self) -> Result<(), String> {
        check_rule_engine_status()
    }
}

/// Create the default health service
pub fn create_default_health_service() -> impl HealthServiceTrait {
    DefaultHealthService
}
