//! Rule-based hypertension decision engine
//!
//! Every rule is a pure function of its input. [`HypertensionRuleEngine`] bundles
//! them behind a stateless value that can be shared across threads freely.

pub mod classifier;
pub mod emergency;
pub mod lifestyle;
pub mod medication;
pub mod monitoring;
pub mod risk;

pub use classifier::classify_blood_pressure;
pub use emergency::check_emergency;
pub use lifestyle::{lifestyle_intervention_details, lifestyle_interventions, target_blood_pressure};
pub use medication::recommend_medications;
pub use monitoring::{follow_up_recommendations, generate_monitoring_plan};
pub use risk::{assess_cardiovascular_risk, count_risk_factors, RiskFactorSummary};

use crate::entities::advice::{
    EmergencyStatus, FollowUpSchedule, LifestyleIntervention, MedicationRecommendation, MonitoringPlan,
    TargetBloodPressure,
};
use crate::entities::classification::{BloodPressureLevel, RiskLevel};
use crate::entities::patient::PatientProfile;

/// Stateless hypertension rule engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HypertensionRuleEngine;

impl HypertensionRuleEngine {
    pub const fn new() -> Self {
        Self
    }

    /// Classify a systolic/diastolic pair
    pub fn classify(&self, systolic: f64, diastolic: f64) -> BloodPressureLevel {
        classify_blood_pressure(systolic, diastolic)
    }

    /// Classify the profile's own reading
    pub fn classify_profile(&self, patient: &PatientProfile) -> BloodPressureLevel {
        classify_blood_pressure(patient.systolic_bp, patient.diastolic_bp)
    }

    /// Cardiovascular risk tier
    pub fn assess_risk(&self, patient: &PatientProfile) -> RiskLevel {
        assess_cardiovascular_risk(patient)
    }

    /// Target blood pressure
    pub fn target_bp(&self, patient: &PatientProfile) -> TargetBloodPressure {
        target_blood_pressure(patient)
    }

    /// Lifestyle interventions as display strings
    pub fn lifestyle_interventions(&self, patient: &PatientProfile) -> Vec<String> {
        lifestyle_interventions(patient)
    }

    /// Lifestyle interventions with category and priority
    pub fn lifestyle_intervention_details(&self, patient: &PatientProfile) -> Vec<LifestyleIntervention> {
        lifestyle_intervention_details(patient)
    }

    /// Drug therapy recommendation
    pub fn recommend_medications(&self, patient: &PatientProfile) -> MedicationRecommendation {
        recommend_medications(patient)
    }

    /// Monitoring and follow-up plan
    pub fn monitoring_plan(&self, patient: &PatientProfile) -> MonitoringPlan {
        generate_monitoring_plan(patient)
    }

    /// Grade-dependent follow-up recommendation
    pub fn follow_up_recommendations(&self, patient: &PatientProfile) -> FollowUpSchedule {
        follow_up_recommendations(self.classify_profile(patient))
    }

    /// Hypertensive crisis check on a raw reading
    pub fn check_emergency(&self, systolic: f64, diastolic: f64) -> EmergencyStatus {
        check_emergency(systolic, diastolic)
    }
}
