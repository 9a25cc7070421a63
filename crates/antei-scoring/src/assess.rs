//! The orchestrator: one assessment snapshot in, one [`RiskResult`] out.

use antei_core::models::assessment::AssessmentData;
use antei_core::models::result::{DomainRisk, RiskLevel, RiskResult};
use antei_exercises::select::select_exercises;

use crate::{back_tests, classify, fall_tests, percentage, projection};

/// Score every domain present in the snapshot and assemble the result.
///
/// Deterministic and side-effect free: identical input produces identical
/// output. Domains absent from the input are absent from the result —
/// there are no zeroed placeholders.
pub fn compute_risk(data: &AssessmentData) -> RiskResult {
    let mut fall_risk = None;
    let mut fall_risk_scores = None;
    if let Some(assessment) = &data.fall_risk {
        let scores = fall_tests::fall_test_scores(&assessment.physical, data.user_info.height_m);
        let sum: u32 = scores.iter().sum();
        let pct = percentage::fall_risk_percentage(sum);
        let level = classify::classify(pct);
        fall_risk = Some(DomainRisk {
            percentage: pct,
            level,
            comment: classify::fall_risk_comment(level).to_string(),
        });
        fall_risk_scores = Some(projection::fall_risk_scores(
            &assessment.questionnaire,
            scores,
        ));
    }

    let mut low_back_pain = None;
    if let Some(assessment) = &data.low_back_pain {
        let scores = back_tests::back_test_scores(&assessment.physical);
        let sum: u32 = scores.iter().sum();
        let pct = percentage::back_pain_risk_percentage(sum);
        let level = classify::classify(pct);
        low_back_pain = Some(DomainRisk {
            percentage: pct,
            level,
            comment: classify::back_pain_comment(level).to_string(),
        });
    }

    let recommendations = build_recommendations(fall_risk.as_ref(), low_back_pain.as_ref());
    let exercises = select_exercises(
        fall_risk.as_ref().map(|r| r.level),
        low_back_pain.as_ref().map(|r| r.level),
    );

    RiskResult {
        fall_risk,
        low_back_pain,
        fall_risk_scores,
        recommendations,
        exercises,
    }
}

/// One flattened `"<domain>: <percent>% - <comment>"` line per scored
/// domain, followed by the tier-specific guidance shown on the results
/// page.
fn build_recommendations(
    fall: Option<&DomainRisk>,
    back: Option<&DomainRisk>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(risk) = fall {
        recommendations.push(format!(
            "転倒リスク: {}% - {}",
            risk.percentage, risk.comment
        ));
        match risk.level {
            RiskLevel::High => {
                recommendations.push(
                    "転倒リスクが高いため、バランス訓練と筋力強化を重点的に行ってください。"
                        .to_string(),
                );
                recommendations.push(
                    "職場環境の安全性を見直し、危険箇所の改善を検討してください。".to_string(),
                );
            }
            RiskLevel::Medium => {
                recommendations.push(
                    "定期的な運動でバランス能力を向上させましょう。".to_string(),
                );
            }
            RiskLevel::Low => {
                recommendations.push("現在の運動習慣を継続してください。".to_string());
            }
        }
    }

    if let Some(risk) = back {
        recommendations.push(format!(
            "腰痛リスク: {}% - {}",
            risk.percentage, risk.comment
        ));
        match risk.level {
            RiskLevel::High => {
                recommendations.push(
                    "腰痛リスクが高いため、体幹強化と柔軟性向上に取り組んでください。".to_string(),
                );
                recommendations.push(
                    "作業姿勢の改善と定期的な休憩を心がけてください。".to_string(),
                );
            }
            RiskLevel::Medium => {
                recommendations.push("予防的な運動を継続しましょう。".to_string());
            }
            RiskLevel::Low => {
                recommendations
                    .push("良い姿勢と運動習慣を維持してください。".to_string());
            }
        }
    }

    recommendations
}
