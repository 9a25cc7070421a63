use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

/// Age band collected on the intake page. Bands, not exact age — the
/// scoring formulas are age-independent and this is report metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeGroup {
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50s")]
    Fifties,
    #[serde(rename = "60s+")]
    SixtiesPlus,
}

impl AgeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Twenties => "20代",
            AgeGroup::Thirties => "30代",
            AgeGroup::Forties => "40代",
            AgeGroup::Fifties => "50代",
            AgeGroup::SixtiesPlus => "60代以上",
        }
    }
}

/// Immutable once submitted for a session. Height is in meters and is the
/// normalization divisor for the two-step test ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInfo {
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub height_m: f64,
}

impl UserInfo {
    pub fn gender_label(&self) -> &'static str {
        match self.gender {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }
}
