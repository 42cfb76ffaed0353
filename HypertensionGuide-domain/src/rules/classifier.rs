//! Blood pressure classification
//!
//! The guideline is encoded as an ordered table of predicates evaluated
//! first-match-wins. Several predicates overlap, so the order of the table is
//! part of the behaviour and must not be rearranged.

use crate::entities::classification::BloodPressureLevel;

/// One row of the classification table
struct ClassificationRule {
    matches: fn(f64, f64) -> bool,
    level: BloodPressureLevel,
}

fn is_normal(systolic: f64, diastolic: f64) -> bool {
    systolic < 120.0 && diastolic < 80.0
}

fn is_elevated_below_130(systolic: f64, diastolic: f64) -> bool {
    systolic < 130.0 && diastolic < 80.0
}

fn is_high_normal_band(systolic: f64, diastolic: f64) -> bool {
    (130.0..140.0).contains(&systolic) || (80.0..90.0).contains(&diastolic)
}

fn is_grade_1_band(systolic: f64, diastolic: f64) -> bool {
    (140.0..160.0).contains(&systolic) || (90.0..100.0).contains(&diastolic)
}

fn is_grade_2_band(systolic: f64, diastolic: f64) -> bool {
    (160.0..180.0).contains(&systolic) || (100.0..110.0).contains(&diastolic)
}

fn is_grade_3_band(systolic: f64, diastolic: f64) -> bool {
    systolic >= 180.0 || diastolic >= 110.0
}

// Shadowed by the grade bands above for every finite input
fn is_isolated_systolic(systolic: f64, diastolic: f64) -> bool {
    systolic >= 140.0 && diastolic < 90.0
}

const CLASSIFICATION_RULES: [ClassificationRule; 7] = [
    ClassificationRule { matches: is_normal, level: BloodPressureLevel::Normal },
    ClassificationRule { matches: is_elevated_below_130, level: BloodPressureLevel::HighNormal },
    ClassificationRule { matches: is_high_normal_band, level: BloodPressureLevel::HighNormal },
    ClassificationRule { matches: is_grade_1_band, level: BloodPressureLevel::Grade1 },
    ClassificationRule { matches: is_grade_2_band, level: BloodPressureLevel::Grade2 },
    ClassificationRule { matches: is_grade_3_band, level: BloodPressureLevel::Grade3 },
    ClassificationRule { matches: is_isolated_systolic, level: BloodPressureLevel::IsolatedSystolic },
];

/// Level returned when no rule matches (only NaN input gets here)
const FALLBACK_LEVEL: BloodPressureLevel = BloodPressureLevel::HighNormal;

/// Classify a systolic/diastolic pair. Never fails.
pub fn classify_blood_pressure(systolic: f64, diastolic: f64) -> BloodPressureLevel {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.matches)(systolic, diastolic))
        .map_or(FALLBACK_LEVEL, |rule| rule.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_fixtures() {
        assert_eq!(classify_blood_pressure(110.0, 70.0), BloodPressureLevel::Normal);
        assert_eq!(classify_blood_pressure(150.0, 95.0), BloodPressureLevel::Grade1);
        assert_eq!(classify_blood_pressure(190.0, 120.0), BloodPressureLevel::Grade3);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_blood_pressure(119.9, 79.9), BloodPressureLevel::Normal);
        assert_eq!(classify_blood_pressure(120.0, 70.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(129.0, 79.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(135.0, 75.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(140.0, 75.0), BloodPressureLevel::Grade1);
        assert_eq!(classify_blood_pressure(160.0, 75.0), BloodPressureLevel::Grade2);
        assert_eq!(classify_blood_pressure(170.0, 105.0), BloodPressureLevel::Grade2);
        assert_eq!(classify_blood_pressure(180.0, 75.0), BloodPressureLevel::Grade3);
    }

    #[test]
    fn test_diastolic_80_to_89_always_high_normal() {
        // The 80-89 diastolic band is checked before any systolic grade band
        assert_eq!(classify_blood_pressure(120.0, 80.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(165.0, 85.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(200.0, 85.0), BloodPressureLevel::HighNormal);
    }

    #[test]
    fn test_pins_rule_order_for_overlapping_bands() {
        // Systolic 130-139 wins over a higher diastolic band
        assert_eq!(classify_blood_pressure(135.0, 95.0), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(135.0, 115.0), BloodPressureLevel::HighNormal);
        // Systolic 140-159 wins over a diastolic crisis value
        assert_eq!(classify_blood_pressure(150.0, 120.0), BloodPressureLevel::Grade1);
        // Below 130 the diastolic band decides
        assert_eq!(classify_blood_pressure(129.0, 95.0), BloodPressureLevel::Grade1);
        assert_eq!(classify_blood_pressure(125.0, 105.0), BloodPressureLevel::Grade2);
    }

    #[test]
    fn test_isolated_systolic_is_unreachable_for_finite_input() {
        for systolic in 60..=300 {
            for diastolic in (40..=200).step_by(5) {
                let level = classify_blood_pressure(systolic as f64, diastolic as f64);
                assert_ne!(level, BloodPressureLevel::IsolatedSystolic);
            }
        }
    }

    #[test]
    fn test_monotonic_in_systolic_below_diastolic_90() {
        for diastolic in 40..90 {
            let mut previous = 0u8;
            for systolic in (diastolic + 1)..=300 {
                let rank = classify_blood_pressure(systolic as f64, diastolic as f64)
                    .ordinal()
                    .expect("graded level");
                assert!(
                    rank >= previous,
                    "rank dropped at {}/{}",
                    systolic,
                    diastolic
                );
                previous = rank;
            }
        }
    }

    #[test]
    fn test_extreme_values_classify_without_panicking() {
        assert_eq!(classify_blood_pressure(1000.0, 50.0), BloodPressureLevel::Grade3);
        assert_eq!(classify_blood_pressure(-10.0, -20.0), BloodPressureLevel::Normal);
        assert_eq!(classify_blood_pressure(f64::NAN, f64::NAN), BloodPressureLevel::HighNormal);
        assert_eq!(classify_blood_pressure(f64::INFINITY, 60.0), BloodPressureLevel::Grade3);
    }
}
