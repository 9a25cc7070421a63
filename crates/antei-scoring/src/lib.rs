//! antei-scoring
//!
//! The deterministic risk engine: per-test bucket mappers, questionnaire
//! aggregation, the percentile transform, tier classification, and the
//! orchestrator that assembles a [`RiskResult`] from one assessment
//! snapshot.
//!
//! Everything here is a pure computation. Malformed or unmeasured input
//! degrades to the lowest bucket instead of failing — the wizard gates
//! completeness before submission, and a conservative score is always more
//! useful to the user than an error.
//!
//! [`RiskResult`]: antei_core::models::result::RiskResult

pub mod assess;
pub mod back_tests;
pub mod classify;
pub mod fall_tests;
pub mod percentage;
pub mod projection;

pub use assess::compute_risk;
