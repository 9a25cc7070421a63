pub mod assessment;
pub mod biopsychosocial;
pub mod exercise;
pub mod fall_risk;
pub mod low_back_pain;
pub mod narrative;
pub mod result;
pub mod user;
