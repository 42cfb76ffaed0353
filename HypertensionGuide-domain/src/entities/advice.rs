use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::classification::{BloodPressureLevel, RiskLevel};
use crate::entities::patient::{BmiCategory, Gender};

/// Target blood pressure in mmHg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct TargetBloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

impl TargetBloodPressure {
    pub const fn new(systolic: u16, diastolic: u16) -> Self {
        Self { systolic, diastolic }
    }

    /// The target as a (systolic, diastolic) tuple
    pub const fn as_tuple(self) -> (u16, u16) {
        (self.systolic, self.diastolic)
    }
}

impl fmt::Display for TargetBloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} mmHg", self.systolic, self.diastolic)
    }
}

/// Priority of a lifestyle intervention for display ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionPriority {
    VeryHigh,
    High,
    Medium,
}

/// Strength of the evidence behind an intervention
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum EvidenceLevel {
    A,
    B,
}

/// Grouping of lifestyle interventions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionCategory {
    Diet,
    Exercise,
    WeightManagement,
    SmokingCessation,
    GlycemicControl,
    MentalHealth,
    Sleep,
    Alcohol,
}

/// A single lifestyle intervention with its display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct LifestyleIntervention {
    pub category: InterventionCategory,
    pub recommendation: String,
    pub priority: InterventionPriority,
    pub evidence_level: EvidenceLevel,
}

/// Antihypertensive drug classes, referenced by name only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum DrugClass {
    #[serde(rename = "ACEI_ARB")]
    AceiArb,
    #[serde(rename = "BETA_BLOCKER")]
    BetaBlocker,
    #[serde(rename = "CALCIUM_CHANNEL_BLOCKER")]
    CalciumChannelBlocker,
}

impl DrugClass {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AceiArb => "ACEI/ARB",
            Self::BetaBlocker => "Beta-blocker",
            Self::CalciumChannelBlocker => "Calcium channel blocker",
        }
    }
}

impl fmt::Display for DrugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A preferred drug class with example agents and the reason it was chosen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DrugRecommendation {
    pub drug_class: DrugClass,
    pub example_agents: Vec<String>,
    pub rationale: String,
}

/// Drug therapy recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MedicationRecommendation {
    /// Whether drug therapy is indicated
    pub needs_medication: bool,

    /// Summary when no drug therapy is indicated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    /// Preferred drug classes, in order of evaluation
    pub primary_drugs: Vec<DrugRecommendation>,

    /// Standard two-drug combinations
    pub combination_drugs: Vec<String>,

    /// Contraindication notes
    pub contraindications: Vec<String>,
}

/// Home blood pressure monitoring instructions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureMonitoring {
    pub frequency: String,
    pub target: TargetBloodPressure,
    pub notes: String,
}

/// Follow-up cadence by treatment phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FollowUpSchedule {
    /// First follow-up after the visit
    pub initial: String,
    /// Interval between treatment adjustments
    pub adjustment: String,
    /// Interval once blood pressure is stable
    pub stable: String,
    /// Yearly assessment
    pub annual: String,
    pub notes: String,
}

/// Monitoring and follow-up plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MonitoringPlan {
    pub blood_pressure: BloodPressureMonitoring,
    pub follow_up: FollowUpSchedule,
    /// Required laboratory panel
    pub laboratory: Vec<String>,
    /// Comorbidity-specific monitoring beyond the lab panel
    pub additional_monitoring: Vec<String>,
}

/// How urgently the patient needs to be seen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    Routine,
    Priority,
    Emergency,
}

/// Result of the hypertensive crisis check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct EmergencyStatus {
    pub is_emergency: bool,
    pub urgency: UrgencyLevel,
    pub warnings: Vec<String>,
    /// Static guidance attached only during a crisis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    pub immediate_actions: Vec<String>,
}

/// Headline assessment of the aggregate advice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Assessment {
    pub blood_pressure_level: BloodPressureLevel,
    pub cardiovascular_risk: RiskLevel,
    pub target_bp: TargetBloodPressure,
}

/// Descriptive summary of the patient's current state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BasicAssessment {
    pub age: u32,
    pub gender: Gender,
    pub current_bp: String,
    pub target_bp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<BmiCategory>,
    pub hypertension_duration: String,
}

/// Ten-year cardiovascular risk estimate band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenYearRiskBand {
    Low,
    Moderate,
    High,
}

/// Ten-year cardiovascular risk estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct TenYearRiskEstimate {
    pub band: TenYearRiskBand,
    /// Estimated risk in percent, capped at 80
    pub percent: u32,
    pub description: String,
}

/// Detailed risk assessment listing the contributing factors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct RiskAssessment {
    pub cardiovascular_risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub target_organ_damage: Vec<String>,
    /// Named risk factors plus twice the number of damaged organs
    pub risk_score: u32,
    pub ten_year_risk: TenYearRiskEstimate,
}

/// Simplified Framingham point score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FraminghamScore {
    pub total_score: u32,
    pub risk_level: RiskLevel,
    pub ten_year_cardiovascular_risk: String,
    pub recommendations: Vec<String>,
}

/// Complete advice record produced for one patient profile
///
/// Contains no timestamps or identifiers: the same profile always yields an
/// identical value. Collaborators add those when they store or transmit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ComprehensiveAdvice {
    pub assessment: Assessment,
    pub basic_assessment: BasicAssessment,
    pub risk_assessment: RiskAssessment,
    pub lifestyle_interventions: Vec<String>,
    pub lifestyle_details: Vec<LifestyleIntervention>,
    pub medication_recommendations: MedicationRecommendation,
    pub monitoring_plan: MonitoringPlan,
    /// Follow-up cadence by grade, including the stable-phase interval
    pub follow_up_recommendations: FollowUpSchedule,
    pub emergency: EmergencyStatus,
    pub warnings: Vec<String>,
    pub patient_education: Vec<String>,
    pub framingham: FraminghamScore,
}
