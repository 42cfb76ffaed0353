use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// A timestamped blood pressure measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
    /// Systolic blood pressure in mmHg
    pub systolic: f64,

    /// Diastolic blood pressure in mmHg
    pub diastolic: f64,

    /// Optional heart rate in beats per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u16>,

    /// When the reading was taken
    pub measured_at: DateTime<Utc>,
}

/// Direction of the blood pressure trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Stable,
    Rising,
    Falling,
}

/// Comparison of the most recent readings against the preceding window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureTrend {
    pub direction: TrendDirection,
    /// Change in average systolic pressure, rounded to 0.1 mmHg
    pub systolic_change: f64,
    /// Change in average diastolic pressure, rounded to 0.1 mmHg
    pub diastolic_change: f64,
    /// Recent window average, formatted as "sys/dia"
    pub recent_average: String,
    /// Previous window average, formatted as "sys/dia"
    pub previous_average: String,
    /// Number of readings analyzed
    pub reading_count: usize,
}
