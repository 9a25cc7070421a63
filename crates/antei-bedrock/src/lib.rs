//! antei-bedrock
//!
//! Narrative enrichment via the Bedrock Converse API. The engine's
//! [`RiskResult`] is complete without anything in this crate — narrative
//! text is best-effort, and every failure path has a deterministic
//! fallback.
//!
//! [`RiskResult`]: antei_core::models::result::RiskResult

pub mod analyze;
pub mod config;
pub mod error;
pub mod prompt;
