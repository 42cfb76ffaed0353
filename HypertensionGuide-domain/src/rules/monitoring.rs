//! Monitoring and follow-up planning

use crate::entities::advice::{BloodPressureMonitoring, FollowUpSchedule, MonitoringPlan};
use crate::entities::classification::BloodPressureLevel;
use crate::entities::patient::PatientProfile;
use crate::rules::classifier::classify_blood_pressure;
use crate::rules::lifestyle::target_blood_pressure;

const BASELINE_LAB_PANEL: [&str; 4] = [
    "Complete blood count",
    "Comprehensive chemistry panel",
    "Urinalysis",
    "Electrocardiogram",
];

const DIABETES_LAB_TESTS: [&str; 1] = ["HbA1c (glycated hemoglobin)"];

const KIDNEY_LAB_TESTS: [&str; 2] = ["Renal function panel", "Urine protein (proteinuria)"];

const DIABETES_MONITORING: [&str; 3] = [
    "Check HbA1c every 3 months",
    "Monitor blood glucose regularly",
    "Annual fundus examination",
];

const KIDNEY_MONITORING: [&str; 3] = [
    "Check renal function every 3-6 months",
    "Monitor urine protein regularly",
    "Watch for nephrotoxic medications",
];

/// Follow-up cadence before severity is taken into account
fn base_follow_up() -> FollowUpSchedule {
    FollowUpSchedule {
        initial: "Recheck in 2-4 weeks to assess response".to_string(),
        adjustment: "Adjust dosage or combine agents as needed".to_string(),
        stable: "Every 1-3 months once blood pressure is stable".to_string(),
        annual: "Comprehensive assessment once a year".to_string(),
        notes: "Bring the home blood pressure diary to every visit".to_string(),
    }
}

/// Follow-up cadence for a blood pressure level; worse grades are seen sooner
pub fn follow_up_schedule(level: BloodPressureLevel) -> FollowUpSchedule {
    let base = base_follow_up();
    match level {
        BloodPressureLevel::Grade2 | BloodPressureLevel::Grade3 => FollowUpSchedule {
            initial: "Recheck in 1-2 weeks".to_string(),
            adjustment: "Adjust the treatment plan every 2-4 weeks".to_string(),
            ..base
        },
        BloodPressureLevel::Grade1 => FollowUpSchedule {
            initial: "Recheck in 2-4 weeks".to_string(),
            adjustment: "Evaluate treatment response every 4-6 weeks".to_string(),
            ..base
        },
        _ => FollowUpSchedule {
            initial: "Recheck in 1-3 months".to_string(),
            ..base
        },
    }
}

/// Grade-dependent follow-up recommendation for the advice bundle
///
/// Unlike [`follow_up_schedule`], the stable-phase interval and yearly check
/// also vary with the grade here.
pub fn follow_up_recommendations(level: BloodPressureLevel) -> FollowUpSchedule {
    let notes = "Bring the home blood pressure diary to every visit".to_string();
    match level {
        BloodPressureLevel::Grade2 | BloodPressureLevel::Grade3 => FollowUpSchedule {
            initial: "Recheck in 1-2 weeks".to_string(),
            adjustment: "Adjust the treatment plan every 2-4 weeks".to_string(),
            stable: "Every 1-2 months once blood pressure is stable".to_string(),
            annual: "Comprehensive assessment once a year".to_string(),
            notes,
        },
        BloodPressureLevel::Grade1 => FollowUpSchedule {
            initial: "Recheck in 2-4 weeks".to_string(),
            adjustment: "Evaluate treatment response every 4-6 weeks".to_string(),
            stable: "Every 2-3 months once blood pressure is stable".to_string(),
            annual: "Comprehensive assessment once a year".to_string(),
            notes,
        },
        _ => FollowUpSchedule {
            initial: "Recheck in 1-3 months".to_string(),
            adjustment: "Adjust as needed".to_string(),
            stable: "Every 3-6 months".to_string(),
            annual: "Physical examination once a year".to_string(),
            notes,
        },
    }
}

/// Laboratory panel; comorbidity extensions are independently additive
pub fn laboratory_panel(patient: &PatientProfile) -> Vec<String> {
    let mut tests: Vec<&str> = BASELINE_LAB_PANEL.to_vec();

    if patient.diabetes {
        tests.extend(DIABETES_LAB_TESTS);
    }

    if patient.kidney_disease {
        tests.extend(KIDNEY_LAB_TESTS);
    }

    tests.into_iter().map(str::to_string).collect()
}

fn additional_monitoring(patient: &PatientProfile) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();

    if patient.diabetes {
        items.extend(DIABETES_MONITORING);
    }

    if patient.kidney_disease {
        items.extend(KIDNEY_MONITORING);
    }

    items.into_iter().map(str::to_string).collect()
}

/// Build the monitoring plan for the patient
pub fn generate_monitoring_plan(patient: &PatientProfile) -> MonitoringPlan {
    let level = classify_blood_pressure(patient.systolic_bp, patient.diastolic_bp);

    MonitoringPlan {
        blood_pressure: BloodPressureMonitoring {
            frequency: "2-3 times per week".to_string(),
            target: target_blood_pressure(patient),
            notes: "Home blood pressure monitoring with a written blood pressure diary is recommended"
                .to_string(),
        },
        follow_up: follow_up_schedule(level),
        laboratory: laboratory_panel(patient),
        additional_monitoring: additional_monitoring(patient),
    }
}
