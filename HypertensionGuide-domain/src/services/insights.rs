use thiserror::Error;

use crate::entities::reading::{BloodPressureReading, BloodPressureTrend, TrendDirection};

/// Readings per comparison window
const WINDOW: usize = 7;

/// Trend analysis errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrendError {
    /// Not enough readings to compare two windows
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

fn average(readings: &[&BloodPressureReading]) -> (f64, f64) {
    let count = readings.len() as f64;
    let systolic: f64 = readings.iter().map(|r| r.systolic).sum();
    let diastolic: f64 = readings.iter().map(|r| r.diastolic).sum();
    (systolic / count, diastolic / count)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Direction of change between two window averages
pub fn trend_direction(systolic_change: f64, diastolic_change: f64) -> TrendDirection {
    if systolic_change.abs() < 5.0 && diastolic_change.abs() < 3.0 {
        TrendDirection::Stable
    } else if systolic_change > 5.0 || diastolic_change > 3.0 {
        TrendDirection::Rising
    } else {
        TrendDirection::Falling
    }
}

/// Compare the latest week of readings with the one before it
///
/// Readings are sorted by `measured_at` first, so callers may pass them in any
/// order. With fewer than 14 readings every reading before the recent window
/// forms the previous window.
pub fn analyze_trend(readings: &[BloodPressureReading]) -> Result<BloodPressureTrend, TrendError> {
    if readings.len() < 2 {
        return Err(TrendError::InsufficientData(format!(
            "At least 2 readings are required, got {}",
            readings.len()
        )));
    }

    let mut sorted: Vec<&BloodPressureReading> = readings.iter().collect();
    sorted.sort_by_key(|reading| reading.measured_at);

    let split = sorted.len().saturating_sub(WINDOW);
    let (earlier, recent) = sorted.split_at(split);
    let previous = &earlier[earlier.len().saturating_sub(WINDOW)..];

    if previous.is_empty() {
        return Err(TrendError::InsufficientData(format!(
            "No readings precede the most recent {} to compare against",
            recent.len()
        )));
    }

    let (recent_systolic, recent_diastolic) = average(recent);
    let (previous_systolic, previous_diastolic) = average(previous);

    let systolic_change = recent_systolic - previous_systolic;
    let diastolic_change = recent_diastolic - previous_diastolic;

    Ok(BloodPressureTrend {
        direction: trend_direction(systolic_change, diastolic_change),
        systolic_change: round_one_decimal(systolic_change),
        diastolic_change: round_one_decimal(diastolic_change),
        recent_average: format!("{:.1}/{:.1}", recent_systolic, recent_diastolic),
        previous_average: format!("{:.1}/{:.1}", previous_systolic, previous_diastolic),
        reading_count: readings.len(),
    })
}
