pub mod advice;
pub mod framingham;
pub mod insights;
pub mod report;

// Domain services
// This module aggregates the rule engine into the advice bundle and its companions.

// Re-export service traits and factory functions
pub use advice::{AdviceService, AdviceServiceError, AdviceServiceTrait, create_default_advice_service};
pub use framingham::calculate_framingham_score;
pub use insights::{analyze_trend, TrendError};
pub use report::render_advice;
