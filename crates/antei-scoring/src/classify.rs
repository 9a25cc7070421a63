//! Risk-percentage classification into the three screening tiers.

use antei_core::models::result::RiskLevel;

/// Tier boundaries: [0,49] low, [50,79] medium, [80,100] high.
pub fn classify(percentage: u8) -> RiskLevel {
    if percentage <= 49 {
        RiskLevel::Low
    } else if percentage <= 79 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Advisory comment shown with the fall-risk tier.
pub fn fall_risk_comment(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "転倒リスクは低く、現在の状態は良好です。今の運動習慣を継続してください。",
        RiskLevel::Medium => {
            "転倒リスクがやや高めです。バランス能力と筋力の改善に取り組みましょう。"
        }
        RiskLevel::High => {
            "転倒リスクが高い状態です。早急な対策が必要です。専門家への相談をお勧めします。"
        }
    }
}

/// Advisory comment shown with the back-pain tier.
pub fn back_pain_comment(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "腰痛リスクは低く、現在の状態は良好です。良い姿勢と運動習慣を維持してください。",
        RiskLevel::Medium => {
            "腰痛リスクがやや高めです。体幹強化と姿勢の改善に取り組みましょう。"
        }
        RiskLevel::High => {
            "腰痛リスクが高い状態です。早急な対策が必要です。専門家への相談をお勧めします。"
        }
    }
}
