use crate::entities::advice::ComprehensiveAdvice;

const DISCLAIMER: &str = "This advice is for reference only and does not replace diagnosis and \
treatment by a physician. Seek medical care promptly if you have questions or your symptoms worsen.";

/// Render advice as plain text
///
/// Used as the narration when no language-model narrator is configured. Output is
/// deterministic for a given advice value.
pub fn render_advice(advice: &ComprehensiveAdvice) -> String {
    let mut lines: Vec<String> = Vec::new();

    let assessment = &advice.assessment;
    lines.push("[Blood pressure assessment]".to_string());
    lines.push(format!("Level: {}", assessment.blood_pressure_level));
    lines.push(format!("Cardiovascular risk: {}", assessment.cardiovascular_risk));
    lines.push(format!("Target: {}", assessment.target_bp));
    lines.push(String::new());

    lines.push("[Lifestyle]".to_string());
    for (index, item) in advice.lifestyle_interventions.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, item));
    }
    lines.push(String::new());

    let medication = &advice.medication_recommendations;
    lines.push("[Medication]".to_string());
    if medication.needs_medication {
        lines.push("Drug therapy is recommended".to_string());
        lines.push(String::new());
        lines.push("Preferred agents:".to_string());
        for drug in &medication.primary_drugs {
            lines.push(format!("- {}: {}", drug.drug_class, drug.example_agents.join(", ")));
            lines.push(format!("  Indication: {}", drug.rationale));
        }
        if !medication.combination_drugs.is_empty() {
            lines.push(format!("Combinations: {}", medication.combination_drugs.join("; ")));
        }
        lines.extend(medication.contraindications.iter().cloned());
    } else {
        lines.push("No drug therapy for now, lifestyle intervention is recommended".to_string());
    }
    lines.push(String::new());

    let plan = &advice.monitoring_plan;
    lines.push("[Monitoring and follow-up]".to_string());
    lines.push(format!("Home monitoring: {}", plan.blood_pressure.frequency));
    lines.push(format!("Follow-up: {}", plan.follow_up.initial));
    lines.push(format!("Once stable: {}", advice.follow_up_recommendations.stable));
    lines.push(String::new());

    if !advice.warnings.is_empty() {
        lines.push("[Important]".to_string());
        for warning in &advice.warnings {
            lines.push(format!("! {}", warning));
        }
        lines.push(String::new());
    }

    lines.push("[Disclaimer]".to_string());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}
