//! Cardiovascular risk stratification

use crate::entities::classification::{BloodPressureLevel, RiskLevel};
use crate::entities::patient::PatientProfile;
use crate::rules::classifier::classify_blood_pressure;

/// Inputs to the risk tier table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactorSummary {
    /// Comorbidity flags, age threshold and obesity, one point each
    pub risk_count: u8,
    /// Heart disease, kidney disease or prior stroke
    pub target_organ_damage: bool,
}

/// Count the patient's risk factors
///
/// The three target-organ conditions are counted here and also reported
/// separately as `target_organ_damage`, so they weigh twice in the tier table.
pub fn count_risk_factors(patient: &PatientProfile) -> RiskFactorSummary {
    let flags = [
        patient.smoking,
        patient.diabetes,
        patient.family_history,
        patient.heart_disease,
        patient.kidney_disease,
        patient.stroke_history,
        patient.meets_age_risk_threshold(),
        patient.bmi.map_or(false, |bmi| bmi >= 28.0),
    ];

    RiskFactorSummary {
        risk_count: flags.iter().filter(|&&flag| flag).count() as u8,
        target_organ_damage: patient.has_target_organ_damage(),
    }
}

/// One row of a per-level tier table
struct TierRule {
    applies: fn(RiskFactorSummary) -> bool,
    tier: RiskLevel,
}

static HIGH_NORMAL_TIERS: [TierRule; 2] = [
    TierRule { applies: |s| s.risk_count == 0, tier: RiskLevel::Low },
    TierRule { applies: |s| s.risk_count <= 2, tier: RiskLevel::Medium },
];

static GRADE_1_TIERS: [TierRule; 3] = [
    TierRule { applies: |s| s.risk_count == 0, tier: RiskLevel::Medium },
    TierRule { applies: |s| s.risk_count <= 2 && !s.target_organ_damage, tier: RiskLevel::Medium },
    TierRule { applies: |s| s.risk_count >= 3 || s.target_organ_damage, tier: RiskLevel::High },
];

static GRADE_2_TIERS: [TierRule; 1] = [
    TierRule { applies: |s| s.risk_count <= 2 && !s.target_organ_damage, tier: RiskLevel::High },
];

/// Ordered tier rules for a blood pressure level
fn tier_rules(level: BloodPressureLevel) -> &'static [TierRule] {
    match level {
        BloodPressureLevel::HighNormal => &HIGH_NORMAL_TIERS,
        BloodPressureLevel::Grade1 => &GRADE_1_TIERS,
        BloodPressureLevel::Grade2 => &GRADE_2_TIERS,
        BloodPressureLevel::Normal
        | BloodPressureLevel::Grade3
        | BloodPressureLevel::IsolatedSystolic => &[],
    }
}

/// Tier used when none of the level's rules apply
fn fallback_tier(level: BloodPressureLevel) -> RiskLevel {
    match level {
        BloodPressureLevel::Normal => RiskLevel::Low,
        BloodPressureLevel::HighNormal => RiskLevel::High,
        // Unreachable given the Grade 1 rules; kept as written in the guideline table
        BloodPressureLevel::Grade1 => RiskLevel::VeryHigh,
        BloodPressureLevel::Grade2
        | BloodPressureLevel::Grade3
        | BloodPressureLevel::IsolatedSystolic => RiskLevel::VeryHigh,
    }
}

/// Assign a risk tier from an already classified level and a factor summary
pub fn stratify(level: BloodPressureLevel, summary: RiskFactorSummary) -> RiskLevel {
    tier_rules(level)
        .iter()
        .find(|rule| (rule.applies)(summary))
        .map_or_else(|| fallback_tier(level), |rule| rule.tier)
}

/// Assess the patient's cardiovascular risk tier
pub fn assess_cardiovascular_risk(patient: &PatientProfile) -> RiskLevel {
    let level = classify_blood_pressure(patient.systolic_bp, patient.diastolic_bp);
    stratify(level, count_risk_factors(patient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::Gender;

    fn summary(risk_count: u8, target_organ_damage: bool) -> RiskFactorSummary {
        RiskFactorSummary { risk_count, target_organ_damage }
    }

    #[test]
    fn test_young_female_normal_pressure_is_low_risk() {
        let patient = PatientProfile::new(30, Gender::Female, 120.0, 80.0).unwrap();
        assert_eq!(assess_cardiovascular_risk(&patient), RiskLevel::Low);
    }

    #[test]
    fn test_elderly_male_with_comorbidities_is_high_or_very_high() {
        let patient = PatientProfile::new(65, Gender::Male, 170.0, 105.0)
            .unwrap()
            .with_smoking(true)
            .with_diabetes(true)
            .with_heart_disease(true);

        let risk = assess_cardiovascular_risk(&patient);
        assert!(risk >= RiskLevel::High);
        assert_eq!(risk, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_count_includes_age_and_obesity() {
        let patient = PatientProfile::new(60, Gender::Male, 150.0, 95.0)
            .unwrap()
            .with_bmi(29.0)
            .unwrap();
        assert_eq!(count_risk_factors(&patient), summary(2, false));

        let lean = patient.clone().with_bmi(27.9).unwrap();
        assert_eq!(count_risk_factors(&lean).risk_count, 1);
    }

    #[test]
    fn test_target_organ_damage_counts_twice() {
        let patient = PatientProfile::new(40, Gender::Female, 150.0, 95.0)
            .unwrap()
            .with_kidney_disease(true);
        let counted = count_risk_factors(&patient);

        assert_eq!(counted, summary(1, true));
        // One factor alone would be MEDIUM; the damage flag lifts it to HIGH
        assert_eq!(assess_cardiovascular_risk(&patient), RiskLevel::High);
    }

    #[test]
    fn test_high_normal_tiers() {
        assert_eq!(stratify(BloodPressureLevel::HighNormal, summary(0, false)), RiskLevel::Low);
        assert_eq!(stratify(BloodPressureLevel::HighNormal, summary(2, true)), RiskLevel::Medium);
        assert_eq!(stratify(BloodPressureLevel::HighNormal, summary(3, false)), RiskLevel::High);
    }

    #[test]
    fn test_grade_1_tiers() {
        assert_eq!(stratify(BloodPressureLevel::Grade1, summary(0, false)), RiskLevel::Medium);
        assert_eq!(stratify(BloodPressureLevel::Grade1, summary(2, false)), RiskLevel::Medium);
        assert_eq!(stratify(BloodPressureLevel::Grade1, summary(1, true)), RiskLevel::High);
        assert_eq!(stratify(BloodPressureLevel::Grade1, summary(3, false)), RiskLevel::High);
    }

    #[test]
    fn test_grade_1_never_reaches_very_high() {
        // Pins the unreachable residual branch of the Grade 1 table
        for risk_count in 0..=8 {
            for damage in [false, true] {
                let tier = stratify(BloodPressureLevel::Grade1, summary(risk_count, damage));
                assert_ne!(tier, RiskLevel::VeryHigh);
            }
        }
    }

    #[test]
    fn test_grade_2_and_above() {
        assert_eq!(stratify(BloodPressureLevel::Grade2, summary(2, false)), RiskLevel::High);
        assert_eq!(stratify(BloodPressureLevel::Grade2, summary(1, true)), RiskLevel::VeryHigh);
        assert_eq!(stratify(BloodPressureLevel::Grade2, summary(3, false)), RiskLevel::VeryHigh);
        assert_eq!(stratify(BloodPressureLevel::Grade3, summary(0, false)), RiskLevel::VeryHigh);
        assert_eq!(
            stratify(BloodPressureLevel::IsolatedSystolic, summary(0, false)),
            RiskLevel::VeryHigh
        );
        assert_eq!(stratify(BloodPressureLevel::Normal, summary(8, true)), RiskLevel::Low);
    }
}
