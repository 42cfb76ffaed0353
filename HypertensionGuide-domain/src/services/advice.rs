use thiserror::Error;
use tracing::{debug, info, warn};

use crate::entities::advice::{
    Assessment, BasicAssessment, ComprehensiveAdvice, EmergencyStatus, RiskAssessment,
    TenYearRiskBand, TenYearRiskEstimate, TargetBloodPressure,
};
use crate::entities::classification::BloodPressureLevel;
use crate::entities::patient::{Gender, PatientProfile, PatientProfileInput, ProfileValidationError};
use crate::entities::reading::{BloodPressureReading, BloodPressureTrend};
use crate::rules::emergency::is_hypertensive_crisis;
use crate::rules::HypertensionRuleEngine;
use crate::services::framingham::calculate_framingham_score;
use crate::services::insights::{analyze_trend, TrendError};

const DIABETES_EMERGENCY_WARNING: &str =
    "Diabetic patients have a stricter blood pressure target";
const STROKE_EMERGENCY_WARNING: &str =
    "Prior stroke with poorly controlled blood pressure raises the risk of cerebrovascular events";

const CRISIS_ADVICE_WARNING: &str =
    "Blood pressure is in the hypertensive crisis range, seek medical care immediately";
const STROKE_ADVICE_WARNING: &str =
    "Prior stroke: keep blood pressure under strict control to prevent recurrence";
const DIABETES_ADVICE_WARNING: &str =
    "Diabetes: blood pressure target is stricter, aim for below 130/80 mmHg";

const BASELINE_EDUCATION: [&str; 6] = [
    "Hypertension is a chronic condition that needs long-term management",
    "Learn how to measure blood pressure correctly at home",
    "Know your target blood pressure and why reaching it matters",
    "Learn the practical steps of lifestyle intervention",
    "Understand why medication is needed and how to take it safely",
    "Recognise the symptoms of a hypertensive emergency and what to do",
];

/// Advice service errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdviceServiceError {
    /// Patient data failed validation
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),

    /// Too few readings for a trend
    #[error(transparent)]
    InsufficientData(#[from] TrendError),
}

/// Trait for advice service operations
pub trait AdviceServiceTrait: Send + Sync {
    /// Validate raw patient data into a profile
    fn validate_profile(&self, input: PatientProfileInput) -> Result<PatientProfile, AdviceServiceError>;

    /// Build the full advice bundle for a validated profile
    fn generate_advice(&self, patient: &PatientProfile) -> ComprehensiveAdvice;

    /// Classify a single reading and check it for a crisis
    fn assess_reading(&self, systolic: f64, diastolic: f64) -> (BloodPressureLevel, EmergencyStatus);

    /// Trend across a series of readings
    fn analyze_readings(&self, readings: &[BloodPressureReading]) -> Result<BloodPressureTrend, AdviceServiceError>;

    /// Validate raw patient data, then build advice for it
    fn generate_advice_from_input(
        &self,
        input: PatientProfileInput,
    ) -> Result<ComprehensiveAdvice, AdviceServiceError> {
        let patient = self.validate_profile(input)?;
        Ok(self.generate_advice(&patient))
    }
}

/// Advice service backed by the rule engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceService {
    engine: HypertensionRuleEngine,
}

impl AdviceService {
    /// Create a new advice service
    pub fn new(engine: HypertensionRuleEngine) -> Self {
        Self { engine }
    }
}

impl AdviceServiceTrait for AdviceService {
    fn validate_profile(&self, input: PatientProfileInput) -> Result<PatientProfile, AdviceServiceError> {
        PatientProfile::try_from_input(input).map_err(|err| {
            warn!(error = %err, "Rejected patient profile");
            AdviceServiceError::from(err)
        })
    }

    fn generate_advice(&self, patient: &PatientProfile) -> ComprehensiveAdvice {
        let level = self.engine.classify_profile(patient);
        let risk = self.engine.assess_risk(patient);
        let target_bp = self.engine.target_bp(patient);
        let emergency = emergency_status(&self.engine, patient);

        if emergency.is_emergency {
            warn!(
                systolic = patient.systolic_bp,
                diastolic = patient.diastolic_bp,
                "Hypertensive crisis detected"
            );
        }

        let advice = ComprehensiveAdvice {
            assessment: Assessment {
                blood_pressure_level: level,
                cardiovascular_risk: risk,
                target_bp,
            },
            basic_assessment: basic_assessment(patient, target_bp),
            risk_assessment: risk_assessment(&self.engine, patient),
            lifestyle_interventions: self.engine.lifestyle_interventions(patient),
            lifestyle_details: self.engine.lifestyle_intervention_details(patient),
            medication_recommendations: self.engine.recommend_medications(patient),
            monitoring_plan: self.engine.monitoring_plan(patient),
            follow_up_recommendations: self.engine.follow_up_recommendations(patient),
            emergency,
            warnings: advice_warnings(patient),
            patient_education: patient_education(patient),
            framingham: calculate_framingham_score(patient),
        };

        debug!(
            level = %advice.assessment.blood_pressure_level,
            risk = %advice.assessment.cardiovascular_risk,
            needs_medication = advice.medication_recommendations.needs_medication,
            "Generated advice"
        );

        advice
    }

    fn assess_reading(&self, systolic: f64, diastolic: f64) -> (BloodPressureLevel, EmergencyStatus) {
        (
            self.engine.classify(systolic, diastolic),
            self.engine.check_emergency(systolic, diastolic),
        )
    }

    fn analyze_readings(&self, readings: &[BloodPressureReading]) -> Result<BloodPressureTrend, AdviceServiceError> {
        let trend = analyze_trend(readings)?;
        info!(direction = ?trend.direction, readings = trend.reading_count, "Analyzed blood pressure trend");
        Ok(trend)
    }
}

/// Create the default advice service
pub fn create_default_advice_service() -> impl AdviceServiceTrait {
    AdviceService::new(HypertensionRuleEngine::new())
}

fn duration_text(years: Option<u32>) -> String {
    match years {
        None | Some(0) => "Newly diagnosed".to_string(),
        Some(1) => "1 year".to_string(),
        Some(n) => format!("{} years", n),
    }
}

/// Patient summary with formatted readings
pub fn basic_assessment(patient: &PatientProfile, target_bp: TargetBloodPressure) -> BasicAssessment {
    BasicAssessment {
        age: patient.age,
        gender: patient.gender,
        current_bp: format!("{}/{} mmHg", patient.systolic_bp, patient.diastolic_bp),
        target_bp: target_bp.to_string(),
        bmi: patient.bmi,
        bmi_category: patient.bmi_category(),
        hypertension_duration: duration_text(patient.hypertension_duration),
    }
}

/// Named risk factors; these are the factors counted by the risk stratification
pub fn named_risk_factors(patient: &PatientProfile) -> Vec<String> {
    let mut factors = Vec::new();

    if patient.meets_age_risk_threshold() {
        factors.push(match patient.gender {
            Gender::Male => "Age (male >= 55)",
            Gender::Female => "Age (female >= 65)",
        });
    }
    if patient.smoking {
        factors.push("Smoking");
    }
    if patient.diabetes {
        factors.push("Diabetes");
    }
    if patient.family_history {
        factors.push("Family history of hypertension");
    }
    if patient.bmi.is_some_and(|bmi| bmi >= 28.0) {
        factors.push("Obesity (BMI >= 28)");
    }

    factors.into_iter().map(str::to_string).collect()
}

fn target_organ_damage(patient: &PatientProfile) -> Vec<String> {
    [
        (patient.heart_disease, "Heart disease"),
        (patient.kidney_disease, "Kidney disease"),
        (patient.stroke_history, "History of stroke"),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, name)| name.to_string())
    .collect()
}

/// Rough ten-year cardiovascular risk percentage, capped at 80
pub fn estimate_ten_year_risk(patient: &PatientProfile, risk_factor_count: usize) -> TenYearRiskEstimate {
    let mut percent: u32 = 5;

    percent += match patient.age {
        65.. => 15,
        55..=64 => 10,
        45..=54 => 5,
        _ => 0,
    };

    if patient.systolic_bp >= 180.0 {
        percent += 20;
    } else if patient.systolic_bp >= 160.0 {
        percent += 15;
    } else if patient.systolic_bp >= 140.0 {
        percent += 10;
    }

    percent += 5 * risk_factor_count as u32;

    if patient.gender == Gender::Male {
        percent += 5;
    }

    let percent = percent.min(80);

    let (band, description) = if percent < 10 {
        (TenYearRiskBand::Low, format!("Low risk (<{}%)", percent))
    } else if percent < 20 {
        (TenYearRiskBand::Moderate, format!("Moderate risk (~{}%)", percent))
    } else {
        (TenYearRiskBand::High, format!("High risk (>{}%)", percent))
    };

    TenYearRiskEstimate {
        band,
        percent,
        description,
    }
}

/// Risk tier with the factors and organ damage behind it
pub fn risk_assessment(engine: &HypertensionRuleEngine, patient: &PatientProfile) -> RiskAssessment {
    let risk_factors = named_risk_factors(patient);
    let target_organ_damage = target_organ_damage(patient);
    let risk_score = (risk_factors.len() + 2 * target_organ_damage.len()) as u32;
    let ten_year_risk = estimate_ten_year_risk(patient, risk_factors.len());

    RiskAssessment {
        cardiovascular_risk_level: engine.assess_risk(patient),
        risk_factors,
        target_organ_damage,
        risk_score,
        ten_year_risk,
    }
}

/// Crisis check on the profile's reading plus warnings for at-risk groups
pub fn emergency_status(engine: &HypertensionRuleEngine, patient: &PatientProfile) -> EmergencyStatus {
    let mut status = engine.check_emergency(patient.systolic_bp, patient.diastolic_bp);

    if patient.diabetes && (patient.systolic_bp >= 140.0 || patient.diastolic_bp >= 90.0) {
        status.warnings.push(DIABETES_EMERGENCY_WARNING.to_string());
    }

    if patient.stroke_history && patient.systolic_bp >= 160.0 {
        status.warnings.push(STROKE_EMERGENCY_WARNING.to_string());
    }

    status
}

/// Top-level warnings attached to the advice bundle
pub fn advice_warnings(patient: &PatientProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    if is_hypertensive_crisis(patient.systolic_bp, patient.diastolic_bp) {
        warnings.push(CRISIS_ADVICE_WARNING.to_string());
    }

    if patient.stroke_history && patient.systolic_bp >= 160.0 {
        warnings.push(STROKE_ADVICE_WARNING.to_string());
    }

    if patient.diabetes && (patient.systolic_bp >= 140.0 || patient.diastolic_bp >= 90.0) {
        warnings.push(DIABETES_ADVICE_WARNING.to_string());
    }

    warnings
}

/// Education topics for the patient
pub fn patient_education(patient: &PatientProfile) -> Vec<String> {
    let mut points: Vec<String> = BASELINE_EDUCATION.iter().map(|p| p.to_string()).collect();

    if patient.diabetes {
        points.push("How diabetes and hypertension affect each other".to_string());
    }
    if patient.smoking {
        points.push("How smoking damages the cardiovascular system".to_string());
    }
    if patient.bmi.is_some_and(|bmi| bmi >= 28.0) {
        points.push("Safe, evidence-based weight loss".to_string());
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::advice::UrgencyLevel;
    use crate::entities::classification::RiskLevel;
    use crate::rules::emergency::{CRISIS_WARNING, MARKED_ELEVATION_WARNING};

    fn service() -> AdviceService {
        AdviceService::default()
    }

    fn input(age: i32, systolic: f64, diastolic: f64) -> PatientProfileInput {
        PatientProfileInput {
            age: Some(age),
            gender: Some(Gender::Male),
            systolic_bp: Some(systolic),
            diastolic_bp: Some(diastolic),
            ..PatientProfileInput::default()
        }
    }

    #[test]
    fn test_generate_advice_from_valid_input() {
        let advice = service()
            .generate_advice_from_input(PatientProfileInput {
                diabetes: true,
                ..input(58, 165.0, 100.0)
            })
            .unwrap();

        assert_eq!(advice.assessment.blood_pressure_level, BloodPressureLevel::Grade2);
        assert_eq!(advice.assessment.cardiovascular_risk, RiskLevel::High);
        assert_eq!(advice.assessment.target_bp.as_tuple(), (130, 80));
        assert!(advice.medication_recommendations.needs_medication);
        assert_eq!(advice.warnings, vec![DIABETES_ADVICE_WARNING.to_string()]);
        assert_eq!(advice.lifestyle_interventions.len(), advice.lifestyle_details.len());
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let err = service()
            .generate_advice_from_input(input(45, 120.0, 130.0))
            .unwrap_err();

        assert!(matches!(
            err,
            AdviceServiceError::Validation(ProfileValidationError::DiastolicNotBelowSystolic { .. })
        ));
        assert!(err.to_string().contains("lower than"));
    }

    #[test]
    fn test_advice_is_idempotent() {
        let patient = PatientProfile::new(70, Gender::Female, 185.0, 112.0)
            .unwrap()
            .with_stroke_history(true)
            .with_bmi(31.0)
            .unwrap();

        assert_eq!(service().generate_advice(&patient), service().generate_advice(&patient));
    }

    #[test]
    fn test_crisis_advice_carries_every_warning() {
        let patient = PatientProfile::new(70, Gender::Female, 185.0, 112.0)
            .unwrap()
            .with_stroke_history(true)
            .with_diabetes(true);
        let advice = service().generate_advice(&patient);

        assert!(advice.emergency.is_emergency);
        assert_eq!(advice.emergency.urgency, UrgencyLevel::Emergency);
        assert_eq!(advice.emergency.warnings[0], CRISIS_WARNING);
        assert!(advice.emergency.warnings.contains(&MARKED_ELEVATION_WARNING.to_string()));
        assert!(advice.emergency.warnings.contains(&DIABETES_EMERGENCY_WARNING.to_string()));
        assert!(advice.emergency.warnings.contains(&STROKE_EMERGENCY_WARNING.to_string()));
        assert_eq!(
            advice.warnings,
            vec![
                CRISIS_ADVICE_WARNING.to_string(),
                STROKE_ADVICE_WARNING.to_string(),
                DIABETES_ADVICE_WARNING.to_string(),
            ]
        );
    }

    #[test]
    fn test_basic_assessment_text() {
        let patient = PatientProfile::new(52, Gender::Female, 150.0, 95.0)
            .unwrap()
            .with_bmi(26.4)
            .unwrap()
            .with_hypertension_duration(3);
        let summary = basic_assessment(&patient, TargetBloodPressure::new(140, 90));

        assert_eq!(summary.current_bp, "150/95 mmHg");
        assert_eq!(summary.target_bp, "140/90 mmHg");
        assert_eq!(summary.hypertension_duration, "3 years");
        assert_eq!(
            summary.bmi_category,
            Some(crate::entities::patient::BmiCategory::Overweight)
        );

        let newly = PatientProfile::new(52, Gender::Female, 150.0, 95.0).unwrap();
        let summary = basic_assessment(&newly, TargetBloodPressure::new(140, 90));
        assert_eq!(summary.hypertension_duration, "Newly diagnosed");
        assert!(summary.bmi_category.is_none());
    }

    #[test]
    fn test_risk_assessment_counts_damage_twice() {
        let patient = PatientProfile::new(60, Gender::Male, 150.0, 95.0)
            .unwrap()
            .with_smoking(true)
            .with_heart_disease(true)
            .with_kidney_disease(true);
        let detail = risk_assessment(&HypertensionRuleEngine::new(), &patient);

        assert_eq!(detail.risk_factors, vec!["Age (male >= 55)", "Smoking"]);
        assert_eq!(detail.target_organ_damage, vec!["Heart disease", "Kidney disease"]);
        assert_eq!(detail.risk_score, 6);
    }

    #[test]
    fn test_ten_year_risk_bands() {
        let young = PatientProfile::new(30, Gender::Female, 118.0, 76.0).unwrap();
        let estimate = estimate_ten_year_risk(&young, 0);
        assert_eq!(estimate.band, TenYearRiskBand::Low);
        assert_eq!(estimate.percent, 5);
        assert_eq!(estimate.description, "Low risk (<5%)");

        let middle = PatientProfile::new(50, Gender::Male, 130.0, 85.0).unwrap();
        assert_eq!(estimate_ten_year_risk(&middle, 0).band, TenYearRiskBand::Moderate);

        let elderly = PatientProfile::new(80, Gender::Male, 200.0, 100.0).unwrap();
        let estimate = estimate_ten_year_risk(&elderly, 5);
        assert_eq!(estimate.percent, 70);
        assert_eq!(estimate_ten_year_risk(&elderly, 9).percent, 80);
        assert_eq!(estimate.band, TenYearRiskBand::High);
    }

    #[test]
    fn test_patient_education_extras() {
        let plain = PatientProfile::new(45, Gender::Male, 130.0, 85.0).unwrap();
        assert_eq!(patient_education(&plain).len(), 6);

        let at_risk = plain.with_diabetes(true).with_smoking(true).with_bmi(30.0).unwrap();
        assert_eq!(patient_education(&at_risk).len(), 9);
    }

    #[test]
    fn test_assess_reading() {
        let (level, status) = service().assess_reading(190.0, 120.0);
        assert_eq!(level, BloodPressureLevel::Grade3);
        assert!(status.is_emergency);
    }

    #[test]
    fn test_analyze_readings_surfaces_insufficient_data() {
        let err = service().analyze_readings(&[]).unwrap_err();
        assert!(matches!(err, AdviceServiceError::InsufficientData(_)));
    }
}
