// HypertensionGuide-api lib.rs
//
// HTTP adapter over the hypertension advice engine.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
