use crate::entities::advice::FraminghamScore;
use crate::entities::classification::RiskLevel;
use crate::entities::patient::{Gender, PatientProfile};

/// Age points; women score one point more than men in each band
fn age_points(gender: Gender, age: u32) -> u32 {
    let base = match age {
        70.. => 5,
        60..=69 => 4,
        50..=59 => 3,
        40..=49 => 2,
        _ => return 0,
    };

    match gender {
        Gender::Male => base,
        Gender::Female => base + 1,
    }
}

fn systolic_points(systolic: f64) -> u32 {
    if systolic >= 180.0 {
        4
    } else if systolic >= 160.0 {
        3
    } else if systolic >= 140.0 {
        2
    } else if systolic >= 120.0 {
        1
    } else {
        0
    }
}

fn recommendations_for(risk_level: RiskLevel) -> &'static [&'static str] {
    match risk_level {
        RiskLevel::Low => &[
            "Maintain a healthy lifestyle",
            "Monitor blood pressure regularly",
            "Annual physical examination",
        ],
        RiskLevel::Medium => &[
            "Active lifestyle intervention",
            "Consider drug therapy",
            "Follow up every 3-6 months",
            "Control other cardiovascular risk factors",
        ],
        RiskLevel::High => &[
            "Intensive lifestyle intervention",
            "Start drug therapy",
            "Follow up every 1-3 months",
            "Strictly control blood pressure and other risk factors",
        ],
        RiskLevel::VeryHigh => &[
            "Start drug therapy immediately",
            "Multi-drug combination therapy",
            "Follow up every 1-2 months",
            "Consider specialist consultation",
            "Actively prevent cardiovascular events",
        ],
    }
}

/// Simplified Framingham point score
///
/// The point table tops out at 15, so the VERY_HIGH band is never produced.
pub fn calculate_framingham_score(patient: &PatientProfile) -> FraminghamScore {
    let mut score = age_points(patient.gender, patient.age) + systolic_points(patient.systolic_bp);

    if patient.smoking {
        score += 2;
    }
    if patient.diabetes {
        score += 2;
    }
    if patient.family_history {
        score += 1;
    }

    let (risk_level, ten_year_risk) = if score >= 20 {
        (RiskLevel::VeryHigh, ">30%")
    } else if score >= 15 {
        (RiskLevel::High, "20-30%")
    } else if score >= 10 {
        (RiskLevel::Medium, "10-20%")
    } else {
        (RiskLevel::Low, "<10%")
    };

    FraminghamScore {
        total_score: score,
        risk_level,
        ten_year_cardiovascular_risk: ten_year_risk.to_string(),
        recommendations: recommendations_for(risk_level)
            .iter()
            .map(|item| item.to_string())
            .collect(),
    }
}
