// Domain entities and value objects
pub mod advice;
pub mod classification;
pub mod patient;
pub mod reading;

// Re-export common types for easier imports
pub use advice::{
    Assessment, ComprehensiveAdvice, DrugClass, DrugRecommendation, EmergencyStatus,
    MedicationRecommendation, MonitoringPlan, TargetBloodPressure, UrgencyLevel,
};
pub use classification::{BloodPressureLevel, RiskLevel};
pub use patient::{Gender, PatientProfile, PatientProfileInput, ProfileValidationError};
pub use reading::{BloodPressureReading, BloodPressureTrend, TrendDirection};
