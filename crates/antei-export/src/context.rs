//! The serializable view of one completed assessment, addressable by name
//! from the report template.

use serde::Serialize;

use antei_core::models::assessment::AssessmentData;
use antei_core::models::exercise::Exercise;
use antei_core::models::narrative::NarrativeAnalysis;
use antei_core::models::result::{FallRiskScores, RiskResult};

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    /// Report date, already formatted by the caller.
    pub generated_on: String,
    pub age_group: String,
    pub gender: String,
    pub fall_risk: Option<DomainSummary>,
    pub low_back_pain: Option<DomainSummary>,
    pub fall_risk_scores: Option<FallRiskScores>,
    pub recommendations: Vec<String>,
    pub exercises: Vec<Exercise>,
    pub narrative: Option<NarrativeAnalysis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainSummary {
    pub percentage: u8,
    pub level_label: String,
    pub comment: String,
}

/// Flatten `(AssessmentData, RiskResult, narrative)` into the template
/// context. The narrative is optional enrichment; the report is complete
/// without it.
pub fn build_report_context(
    data: &AssessmentData,
    result: &RiskResult,
    narrative: Option<&NarrativeAnalysis>,
    generated_on: &str,
) -> ReportContext {
    let title = if narrative.is_some() {
        "AI健康リスク評価レポート"
    } else {
        "健康リスク評価レポート"
    };

    ReportContext {
        title: title.to_string(),
        generated_on: generated_on.to_string(),
        age_group: data.user_info.age_group.label().to_string(),
        gender: data.user_info.gender_label().to_string(),
        fall_risk: result.fall_risk.as_ref().map(summarize),
        low_back_pain: result.low_back_pain.as_ref().map(summarize),
        fall_risk_scores: result.fall_risk_scores,
        recommendations: result.recommendations.clone(),
        exercises: result.exercises.clone(),
        narrative: narrative.cloned(),
    }
}

fn summarize(risk: &antei_core::models::result::DomainRisk) -> DomainSummary {
    DomainSummary {
        percentage: risk.percentage,
        level_label: risk.level.label().to_string(),
        comment: risk.comment.clone(),
    }
}
