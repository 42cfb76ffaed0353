pub mod advice;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use advice::{analyze_reading_trend, classify_reading, create_advice};
pub use health::health_check;
