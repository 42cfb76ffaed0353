// HypertensionGuide Domain
// This crate contains the hypertension rule engine and the advice built on top of it

// Domain entities
pub mod entities;

// Guideline rules
pub mod rules;

// Services that aggregate the rules into advice
pub mod services;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

pub use rules::HypertensionRuleEngine;
