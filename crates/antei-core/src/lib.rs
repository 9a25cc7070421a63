//! antei-core
//!
//! Pure domain types for the Antei occupational-health self-assessment
//! tool. No AWS dependency — this is the shared vocabulary of the system:
//! questionnaire and measurement inputs, the risk result, the exercise
//! catalog entry, and the narrative schema.

pub mod error;
pub mod models;
