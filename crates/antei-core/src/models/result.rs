use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::exercise::Exercise;

/// Screening tier, not a diagnosis. Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低リスク",
            RiskLevel::Medium => "中リスク",
            RiskLevel::High => "高リスク",
        }
    }
}

/// One scored domain: relative risk percentage in [5,95], its tier, and
/// the fixed advisory comment for that tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainRisk {
    pub percentage: u8,
    pub level: RiskLevel,
    pub comment: String,
}

/// 1–5 ratings for the five fall-risk competency groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompetencyRatings {
    pub walking_ability: u8,
    pub agility: u8,
    pub dynamic_balance: u8,
    pub static_balance_closed: u8,
    pub static_balance_open: u8,
}

/// Dual-axis projection for the radar chart: measurement-derived ratings
/// next to self-assessment ratings. Display only — never fed back into
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FallRiskScores {
    pub physical: CompetencyRatings,
    pub self_assessment: CompetencyRatings,
}

/// The engine's output. Immutable once computed; domains absent from the
/// input are absent here too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    pub fall_risk: Option<DomainRisk>,
    pub low_back_pain: Option<DomainRisk>,
    pub fall_risk_scores: Option<FallRiskScores>,
    pub recommendations: Vec<String>,
    pub exercises: Vec<Exercise>,
}
