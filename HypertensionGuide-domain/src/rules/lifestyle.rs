//! Target blood pressure and lifestyle interventions

use crate::entities::advice::{
    EvidenceLevel, InterventionCategory, InterventionPriority, LifestyleIntervention,
    TargetBloodPressure,
};
use crate::entities::patient::PatientProfile;

const STRICT_TARGET: TargetBloodPressure = TargetBloodPressure::new(130, 80);
const ELDERLY_TARGET: TargetBloodPressure = TargetBloodPressure::new(150, 90);
const STANDARD_TARGET: TargetBloodPressure = TargetBloodPressure::new(140, 90);

/// Target blood pressure; the first matching rule wins
pub fn target_blood_pressure(patient: &PatientProfile) -> TargetBloodPressure {
    if patient.diabetes || patient.kidney_disease {
        STRICT_TARGET
    } else if patient.age >= 65 {
        ELDERLY_TARGET
    } else if patient.heart_disease {
        STRICT_TARGET
    } else {
        STANDARD_TARGET
    }
}

fn intervention(
    category: InterventionCategory,
    recommendation: String,
    priority: InterventionPriority,
    evidence_level: EvidenceLevel,
) -> LifestyleIntervention {
    LifestyleIntervention {
        category,
        recommendation,
        priority,
        evidence_level,
    }
}

/// Lifestyle interventions with category, priority and evidence level, in display order
pub fn lifestyle_intervention_details(patient: &PatientProfile) -> Vec<LifestyleIntervention> {
    use EvidenceLevel::{A, B};
    use InterventionCategory as Category;
    use InterventionPriority as Priority;

    let mut interventions = vec![
        intervention(
            Category::Diet,
            "Reduce sodium intake, keeping daily salt below 6 g".to_string(),
            Priority::High,
            A,
        ),
        intervention(
            Category::Diet,
            "Eat more potassium-rich foods such as fresh vegetables and fruit".to_string(),
            Priority::High,
            A,
        ),
        intervention(
            Category::Exercise,
            "Do regular aerobic exercise, at least 150 minutes of moderate intensity per week"
                .to_string(),
            Priority::High,
            A,
        ),
    ];

    if let Some(bmi) = patient.bmi.filter(|&bmi| bmi >= 24.0) {
        interventions.push(intervention(
            Category::WeightManagement,
            format!(
                "Control body weight, aiming for a BMI of 18.5-23.9 kg/m² (current BMI: {:.1})",
                bmi
            ),
            Priority::High,
            A,
        ));
    }

    if patient.smoking {
        interventions.push(intervention(
            Category::SmokingCessation,
            "Stop smoking completely and avoid second-hand smoke".to_string(),
            Priority::VeryHigh,
            A,
        ));
    }

    if patient.diabetes {
        interventions.push(intervention(
            Category::GlycemicControl,
            "Keep blood glucose under strict control with an HbA1c target below 7%".to_string(),
            Priority::High,
            A,
        ));
        interventions.push(intervention(
            Category::GlycemicControl,
            "Monitor blood glucose regularly".to_string(),
            Priority::High,
            A,
        ));
    }

    interventions.extend([
        intervention(
            Category::MentalHealth,
            "Keep a balanced state of mind and practise relaxation techniques".to_string(),
            Priority::Medium,
            B,
        ),
        intervention(
            Category::Sleep,
            "Get enough sleep, 7-8 hours each night".to_string(),
            Priority::Medium,
            B,
        ),
        intervention(
            Category::Alcohol,
            "Limit alcohol to under 25 g per day for men and under 15 g per day for women"
                .to_string(),
            Priority::Medium,
            B,
        ),
    ]);

    interventions
}

/// Lifestyle interventions as plain strings, in display order
pub fn lifestyle_interventions(patient: &PatientProfile) -> Vec<String> {
    lifestyle_intervention_details(patient)
        .into_iter()
        .map(|intervention| intervention.recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::Gender;

    fn patient(age: u32) -> PatientProfile {
        PatientProfile::new(age, Gender::Male, 150.0, 95.0).unwrap()
    }

    #[test]
    fn test_target_for_diabetic_is_strict() {
        assert_eq!(target_blood_pressure(&patient(50).with_diabetes(true)).as_tuple(), (130, 80));
        // Diabetes is checked before age
        assert_eq!(target_blood_pressure(&patient(75).with_diabetes(true)).as_tuple(), (130, 80));
    }

    #[test]
    fn test_target_for_elderly_non_diabetic() {
        assert_eq!(target_blood_pressure(&patient(70)).as_tuple(), (150, 90));
        // Age is checked before heart disease
        assert_eq!(target_blood_pressure(&patient(70).with_heart_disease(true)).as_tuple(), (150, 90));
    }

    #[test]
    fn test_target_for_heart_disease_and_default() {
        assert_eq!(target_blood_pressure(&patient(50).with_heart_disease(true)).as_tuple(), (130, 80));
        assert_eq!(target_blood_pressure(&patient(50).with_kidney_disease(true)).as_tuple(), (130, 80));
        assert_eq!(target_blood_pressure(&patient(50)).as_tuple(), (140, 90));
    }

    #[test]
    fn test_baseline_interventions_only() {
        let items = lifestyle_interventions(&patient(40));
        assert_eq!(items.len(), 6);
        assert!(items[0].contains("sodium"));
        assert!(items[1].contains("potassium"));
        assert!(items[2].contains("150 minutes"));
        assert!(items[5].contains("alcohol"));
    }

    #[test]
    fn test_conditional_interventions_keep_order() {
        let profile = patient(40).with_bmi(26.5).unwrap().with_smoking(true).with_diabetes(true);
        let details = lifestyle_intervention_details(&profile);
        let categories: Vec<InterventionCategory> = details.iter().map(|d| d.category).collect();

        assert_eq!(
            categories,
            vec![
                InterventionCategory::Diet,
                InterventionCategory::Diet,
                InterventionCategory::Exercise,
                InterventionCategory::WeightManagement,
                InterventionCategory::SmokingCessation,
                InterventionCategory::GlycemicControl,
                InterventionCategory::GlycemicControl,
                InterventionCategory::MentalHealth,
                InterventionCategory::Sleep,
                InterventionCategory::Alcohol,
            ]
        );
        assert!(details[3].recommendation.contains("26.5"));
        assert_eq!(details[4].priority, InterventionPriority::VeryHigh);
    }

    #[test]
    fn test_weight_advice_starts_at_bmi_24() {
        let below = lifestyle_interventions(&patient(40).with_bmi(23.9).unwrap());
        let at = lifestyle_interventions(&patient(40).with_bmi(24.0).unwrap());
        assert_eq!(below.len(), 6);
        assert_eq!(at.len(), 7);
    }
}
