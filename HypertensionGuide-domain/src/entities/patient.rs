use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Errors raised while constructing a [`PatientProfile`]
///
/// This is the only error class in the domain. Once a profile exists, every
/// rule-engine derivation over it is infallible.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileValidationError {
    /// A mandatory field was not supplied
    #[error("Validation error: missing required field '{0}'")]
    MissingField(&'static str),

    /// One or more fields fall outside their accepted range
    #[error("Validation error: {0}")]
    InvalidField(String),

    /// Diastolic pressure must be strictly below systolic pressure
    #[error("Validation error: diastolic pressure ({diastolic}) must be lower than systolic pressure ({systolic})")]
    DiastolicNotBelowSystolic { systolic: f64, diastolic: f64 },

    /// Height, weight or BMI cannot produce a usable body-mass index
    #[error("Validation error: {0}")]
    InvalidBodyMeasurement(String),
}

/// Patient gender as used by the age risk threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// BMI category using the Chinese adult cut-offs (24 / 28)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Calculate BMI from height in centimetres and weight in kilograms, rounded to 2 decimals
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, ProfileValidationError> {
    if height_cm <= 0.0 || weight_kg <= 0.0 || !height_cm.is_finite() || !weight_kg.is_finite() {
        return Err(ProfileValidationError::InvalidBodyMeasurement(
            "Height and weight must be positive numbers".to_string(),
        ));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// Check an explicitly supplied BMI value
fn validate_bmi(bmi: f64) -> Result<f64, ProfileValidationError> {
    if bmi > 0.0 && bmi.is_finite() {
        Ok(bmi)
    } else {
        Err(ProfileValidationError::InvalidBodyMeasurement(format!(
            "BMI must be a positive number, got {}",
            bmi
        )))
    }
}

/// Categorize a BMI value
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.0 {
        BmiCategory::Normal
    } else if bmi < 28.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Raw patient data as received from a collaborator (API layer, database row, ...)
///
/// Every field is optional here so that missing mandatory fields can be reported
/// as validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PatientProfileInput {
    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,

    /// Gender
    pub gender: Option<Gender>,

    /// Systolic blood pressure in mmHg
    #[validate(range(min = 60.0, max = 300.0, message = "Systolic must be between 60 and 300"))]
    pub systolic_bp: Option<f64>,

    /// Diastolic blood pressure in mmHg
    #[validate(range(min = 40.0, max = 200.0, message = "Diastolic must be between 40 and 200"))]
    pub diastolic_bp: Option<f64>,

    #[serde(default)]
    pub smoking: bool,

    #[serde(default)]
    pub diabetes: bool,

    #[serde(default)]
    pub family_history: bool,

    #[serde(default)]
    pub heart_disease: bool,

    #[serde(default)]
    pub kidney_disease: bool,

    #[serde(default)]
    pub stroke_history: bool,

    /// Body-mass index; takes precedence over height/weight when present
    pub bmi: Option<f64>,

    /// Height in centimetres
    #[validate(range(min = 50.0, max = 250.0, message = "Height must be between 50 and 250 cm"))]
    pub height_cm: Option<f64>,

    /// Weight in kilograms
    #[validate(range(min = 20.0, max = 300.0, message = "Weight must be between 20 and 300 kg"))]
    pub weight_kg: Option<f64>,

    /// Years since hypertension was diagnosed
    #[validate(range(min = 0, message = "Hypertension duration cannot be negative"))]
    pub hypertension_duration: Option<i32>,

    /// Free-text list of current medications
    pub current_medications: Option<String>,

    /// Free-text allergy history
    pub allergies: Option<String>,
}

/// Validated patient profile consumed by the rule engine
///
/// Deserialization goes through [`PatientProfile::try_from_input`], so a
/// deserialized profile satisfies the same checks as a constructed one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(try_from = "PatientProfileInput")]
pub struct PatientProfile {
    pub age: u32,
    pub gender: Gender,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,

    pub smoking: bool,
    pub diabetes: bool,
    pub family_history: bool,
    pub heart_disease: bool,
    pub kidney_disease: bool,
    pub stroke_history: bool,

    pub bmi: Option<f64>,
    pub hypertension_duration: Option<u32>,
    pub current_medications: Option<String>,
    pub allergies: Option<String>,
}

impl PatientProfile {
    /// Create a profile from the mandatory fields, all flags off
    pub fn new(
        age: u32,
        gender: Gender,
        systolic_bp: f64,
        diastolic_bp: f64,
    ) -> Result<Self, ProfileValidationError> {
        Self::try_from_input(PatientProfileInput {
            age: Some(i32::try_from(age).unwrap_or(i32::MAX)),
            gender: Some(gender),
            systolic_bp: Some(systolic_bp),
            diastolic_bp: Some(diastolic_bp),
            ..PatientProfileInput::default()
        })
    }

    /// Validate raw input and build a profile from it
    pub fn try_from_input(input: PatientProfileInput) -> Result<Self, ProfileValidationError> {
        let age = input.age.ok_or(ProfileValidationError::MissingField("age"))?;
        let gender = input.gender.ok_or(ProfileValidationError::MissingField("gender"))?;
        let systolic_bp = input
            .systolic_bp
            .ok_or(ProfileValidationError::MissingField("systolic_bp"))?;
        let diastolic_bp = input
            .diastolic_bp
            .ok_or(ProfileValidationError::MissingField("diastolic_bp"))?;

        if let Err(validation_errors) = input.validate() {
            return Err(ProfileValidationError::InvalidField(describe_validation_errors(
                &validation_errors,
            )));
        }

        if !systolic_bp.is_finite() || !diastolic_bp.is_finite() {
            return Err(ProfileValidationError::InvalidField(
                "Blood pressure values must be finite numbers".to_string(),
            ));
        }

        if diastolic_bp >= systolic_bp {
            return Err(ProfileValidationError::DiastolicNotBelowSystolic {
                systolic: systolic_bp,
                diastolic: diastolic_bp,
            });
        }

        let bmi = match (input.bmi, input.height_cm, input.weight_kg) {
            (Some(bmi), _, _) => Some(validate_bmi(bmi)?),
            (None, Some(height), Some(weight)) => Some(calculate_bmi(height, weight)?),
            _ => None,
        };

        // Ranges were checked above, so the casts cannot wrap
        Ok(Self {
            age: age as u32,
            gender,
            systolic_bp,
            diastolic_bp,
            smoking: input.smoking,
            diabetes: input.diabetes,
            family_history: input.family_history,
            heart_disease: input.heart_disease,
            kidney_disease: input.kidney_disease,
            stroke_history: input.stroke_history,
            bmi,
            hypertension_duration: input.hypertension_duration.map(|years| years as u32),
            current_medications: input.current_medications,
            allergies: input.allergies,
        })
    }

    pub fn with_smoking(self, smoking: bool) -> Self {
        Self { smoking, ..self }
    }

    pub fn with_diabetes(self, diabetes: bool) -> Self {
        Self { diabetes, ..self }
    }

    pub fn with_family_history(self, family_history: bool) -> Self {
        Self { family_history, ..self }
    }

    pub fn with_heart_disease(self, heart_disease: bool) -> Self {
        Self { heart_disease, ..self }
    }

    pub fn with_kidney_disease(self, kidney_disease: bool) -> Self {
        Self { kidney_disease, ..self }
    }

    pub fn with_stroke_history(self, stroke_history: bool) -> Self {
        Self { stroke_history, ..self }
    }

    /// Set an explicit BMI; rejects zero, negative and non-finite values
    pub fn with_bmi(self, bmi: f64) -> Result<Self, ProfileValidationError> {
        let bmi = validate_bmi(bmi)?;
        Ok(Self { bmi: Some(bmi), ..self })
    }

    pub fn with_hypertension_duration(self, years: u32) -> Self {
        Self {
            hypertension_duration: Some(years),
            ..self
        }
    }

    pub fn with_allergies(self, allergies: impl Into<String>) -> Self {
        Self {
            allergies: Some(allergies.into()),
            ..self
        }
    }

    /// Whether heart disease, kidney disease or a prior stroke is recorded
    #[must_use]
    pub fn has_target_organ_damage(&self) -> bool {
        self.heart_disease || self.kidney_disease || self.stroke_history
    }

    /// Whether the patient is past the gender-specific age threshold (male >= 55, female >= 65)
    #[must_use]
    pub fn meets_age_risk_threshold(&self) -> bool {
        match self.gender {
            Gender::Male => self.age >= 55,
            Gender::Female => self.age >= 65,
        }
    }

    /// BMI category, if a BMI is known
    #[must_use]
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(classify_bmi)
    }
}

impl TryFrom<PatientProfileInput> for PatientProfile {
    type Error = ProfileValidationError;

    fn try_from(input: PatientProfileInput) -> Result<Self, Self::Error> {
        Self::try_from_input(input)
    }
}

/// Flatten `validator` errors into a single message, sorted by field name
fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| {
                    if let Some(msg) = &err.message {
                        msg.to_string()
                    } else {
                        format!("Invalid {}", field)
                    }
                })
                .collect();
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
