//! Drug therapy recommendation

use crate::entities::advice::{DrugClass, DrugRecommendation, MedicationRecommendation};
use crate::entities::classification::{BloodPressureLevel, RiskLevel};
use crate::entities::patient::PatientProfile;
use crate::rules::classifier::classify_blood_pressure;
use crate::rules::risk::assess_cardiovascular_risk;

const LIFESTYLE_ONLY_RECOMMENDATION: &str =
    "No drug therapy needed for now; continue lifestyle intervention and recheck in 3 months";

const STANDARD_COMBINATIONS: [&str; 3] = [
    "ACEI/ARB + calcium channel blocker",
    "ACEI/ARB + diuretic",
    "Calcium channel blocker + diuretic",
];

const ALLERGY_NOTE_PREFIX: &str = "Caution, recorded drug allergies: ";

/// Whether drug therapy is indicated for a level and risk tier
pub fn needs_medication(level: BloodPressureLevel, risk: RiskLevel) -> bool {
    match level {
        BloodPressureLevel::Grade2 | BloodPressureLevel::Grade3 => true,
        BloodPressureLevel::Grade1 => matches!(risk, RiskLevel::High | RiskLevel::VeryHigh),
        _ => false,
    }
}

fn drug(drug_class: DrugClass, agents: &[&str], rationale: &str) -> DrugRecommendation {
    DrugRecommendation {
        drug_class,
        example_agents: agents.iter().map(|agent| agent.to_string()).collect(),
        rationale: rationale.to_string(),
    }
}

/// Preferred drug classes; each indication is evaluated independently
fn preferred_drugs(patient: &PatientProfile, level: BloodPressureLevel) -> Vec<DrugRecommendation> {
    let mut drugs = Vec::new();

    if patient.diabetes || patient.kidney_disease {
        drugs.push(drug(
            DrugClass::AceiArb,
            &["Enalapril", "Losartan", "Valsartan"],
            "Preferred for diabetes or kidney disease; protects renal function",
        ));
    }

    if patient.heart_disease {
        drugs.push(drug(
            DrugClass::BetaBlocker,
            &["Metoprolol", "Bisoprolol"],
            "Preferred for coronary heart disease; lowers the risk of cardiac events",
        ));
    }

    if patient.age >= 60 || level == BloodPressureLevel::IsolatedSystolic {
        drugs.push(drug(
            DrugClass::CalciumChannelBlocker,
            &["Amlodipine", "Nifedipine extended-release"],
            "Preferred for older patients and isolated systolic hypertension",
        ));
    }

    if drugs.is_empty() {
        drugs.push(drug(
            DrugClass::AceiArb,
            &["Enalapril", "Losartan"],
            "General first-line agent with established cardiovascular protection",
        ));
    }

    drugs
}

/// Recommend drug therapy for the patient
pub fn recommend_medications(patient: &PatientProfile) -> MedicationRecommendation {
    let level = classify_blood_pressure(patient.systolic_bp, patient.diastolic_bp);
    let risk = assess_cardiovascular_risk(patient);

    if !needs_medication(level, risk) {
        return MedicationRecommendation {
            needs_medication: false,
            recommendation: Some(LIFESTYLE_ONLY_RECOMMENDATION.to_string()),
            primary_drugs: Vec::new(),
            combination_drugs: Vec::new(),
            contraindications: Vec::new(),
        };
    }

    let combination_drugs = if level.is_severe_grade() {
        STANDARD_COMBINATIONS.iter().map(|c| c.to_string()).collect()
    } else {
        Vec::new()
    };

    let contraindications = patient
        .allergies
        .iter()
        .filter(|allergies| !allergies.is_empty())
        .map(|allergies| format!("{}{}", ALLERGY_NOTE_PREFIX, allergies))
        .collect();

    MedicationRecommendation {
        needs_medication: true,
        recommendation: None,
        primary_drugs: preferred_drugs(patient, level),
        combination_drugs,
        contraindications,
    }
}
