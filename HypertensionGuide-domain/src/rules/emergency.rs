//! Hypertensive crisis detection
//!
//! Depends only on the raw pressures, never on the rest of the pipeline.

use crate::entities::advice::{EmergencyStatus, UrgencyLevel};

pub const CRISIS_WARNING: &str = "Hypertensive crisis: blood pressure is severely elevated";
pub const SEEK_CARE_WARNING: &str = "Seek medical care immediately, do not wait";
pub const MARKED_ELEVATION_WARNING: &str =
    "Blood pressure is markedly elevated and needs timely intervention";

const EMERGENCY_GUIDANCE: &str = "Call emergency services or go to the nearest emergency department. \
Sit or lie down quietly while waiting, do not take extra doses of medication on your own, \
and report chest pain, shortness of breath, severe headache, blurred vision, confusion, \
numbness or weakness immediately.";

const CRISIS_ACTIONS: [&str; 4] = [
    "Seek medical care immediately",
    "Avoid lowering blood pressure too rapidly",
    "Watch for neurological symptoms",
    "Have emergency medication ready",
];

const PRIORITY_ACTIONS: [&str; 3] = [
    "See a doctor within 1-2 weeks",
    "Start or adjust antihypertensive treatment",
    "Monitor blood pressure closely",
];

/// Systolic >= 180 or diastolic >= 110
pub fn is_hypertensive_crisis(systolic: f64, diastolic: f64) -> bool {
    systolic >= 180.0 || diastolic >= 110.0
}

/// Systolic >= 160 or diastolic >= 100; a superset of the crisis condition
pub fn is_markedly_elevated(systolic: f64, diastolic: f64) -> bool {
    systolic >= 160.0 || diastolic >= 100.0
}

/// Check a reading for a hypertensive crisis
///
/// The crisis and marked-elevation conditions are evaluated independently and
/// both contribute warnings when they fire.
pub fn check_emergency(systolic: f64, diastolic: f64) -> EmergencyStatus {
    let crisis = is_hypertensive_crisis(systolic, diastolic);
    let elevated = is_markedly_elevated(systolic, diastolic);

    let mut warnings = Vec::new();
    let mut guidance = None;

    if crisis {
        warnings.push(CRISIS_WARNING.to_string());
        warnings.push(SEEK_CARE_WARNING.to_string());
        guidance = Some(EMERGENCY_GUIDANCE.to_string());
    }

    if elevated {
        warnings.push(MARKED_ELEVATION_WARNING.to_string());
    }

    let urgency = if crisis {
        UrgencyLevel::Emergency
    } else if elevated {
        UrgencyLevel::Priority
    } else {
        UrgencyLevel::Routine
    };

    let actions: &[&str] = match urgency {
        UrgencyLevel::Emergency => &CRISIS_ACTIONS,
        UrgencyLevel::Priority => &PRIORITY_ACTIONS,
        UrgencyLevel::Routine => &[],
    };

    EmergencyStatus {
        is_emergency: crisis,
        urgency,
        warnings,
        guidance,
        immediate_actions: actions.iter().map(|action| action.to_string()).collect(),
    }
}
