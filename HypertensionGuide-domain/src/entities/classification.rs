use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Blood pressure level derived from a single systolic/diastolic pair
///
/// The graded levels form an ordinal scale (see [`BloodPressureLevel::ordinal`]).
/// `IsolatedSystolic` is a special case that sits outside that scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureLevel {
    /// Systolic < 120 and diastolic < 80
    #[serde(rename = "NORMAL")]
    Normal,

    /// Upper end of the normal range (120-139 / 80-89)
    #[serde(rename = "HIGH_NORMAL")]
    HighNormal,

    /// Grade 1 hypertension (140-159 / 90-99)
    #[serde(rename = "GRADE_1")]
    Grade1,

    /// Grade 2 hypertension (160-179 / 100-109)
    #[serde(rename = "GRADE_2")]
    Grade2,

    /// Grade 3 hypertension (>= 180 / >= 110)
    #[serde(rename = "GRADE_3")]
    Grade3,

    /// Isolated systolic hypertension (>= 140 with diastolic < 90)
    #[serde(rename = "ISOLATED_SYSTOLIC")]
    IsolatedSystolic,
}

impl BloodPressureLevel {
    /// Position on the severity scale, `None` for the non-ordinal isolated systolic case
    #[must_use]
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Self::Normal => Some(0),
            Self::HighNormal => Some(1),
            Self::Grade1 => Some(2),
            Self::Grade2 => Some(3),
            Self::Grade3 => Some(4),
            Self::IsolatedSystolic => None,
        }
    }

    /// Whether this level is Grade 2 or Grade 3 hypertension
    #[must_use]
    pub const fn is_severe_grade(self) -> bool {
        matches!(self, Self::Grade2 | Self::Grade3)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal blood pressure",
            Self::HighNormal => "High-normal blood pressure",
            Self::Grade1 => "Grade 1 hypertension",
            Self::Grade2 => "Grade 2 hypertension",
            Self::Grade3 => "Grade 3 hypertension",
            Self::IsolatedSystolic => "Isolated systolic hypertension",
        }
    }
}

impl fmt::Display for BloodPressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cardiovascular risk tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
            Self::VeryHigh => "Very high risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
