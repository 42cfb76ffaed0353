// Public entities for the HypertensionGuide API
// This module contains data structures that are shared across the application boundary

// Request and response envelopes for the advice endpoints
pub mod advice;

// Common entities for error handling
pub mod common;
