use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Nine Likert items ([1,5] each) in five competency groups. A value of 0
/// means "unanswered" — the wizard must not submit until every item is set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FallRiskQuestionnaire {
    // 歩行能力・筋力
    pub crowd_walking: u8,
    pub physical_confidence: u8,
    // 敏捷性
    pub quick_reaction: u8,
    pub step_recovery: u8,
    // 動的バランス
    pub sock_wearing: u8,
    pub heel_to_toe: u8,
    // 静的バランス（閉眼）
    pub closed_eye_confidence: u8,
    // 静的バランス（開眼）
    pub train_standing: u8,
    pub open_eye_confidence: u8,
}

impl FallRiskQuestionnaire {
    /// Item answers grouped by competency, in display order.
    pub fn groups(&self) -> [Vec<u8>; 5] {
        [
            vec![self.crowd_walking, self.physical_confidence],
            vec![self.quick_reaction, self.step_recovery],
            vec![self.sock_wearing, self.heel_to_toe],
            vec![self.closed_eye_confidence],
            vec![self.train_standing, self.open_eye_confidence],
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.answers().iter().all(|&a| (1..=5).contains(&a))
    }

    fn answers(&self) -> [u8; 9] {
        [
            self.crowd_walking,
            self.physical_confidence,
            self.quick_reaction,
            self.step_recovery,
            self.sock_wearing,
            self.heel_to_toe,
            self.closed_eye_confidence,
            self.train_standing,
            self.open_eye_confidence,
        ]
    }
}

/// Raw measurements for the five official MHLW tests. A value of 0 means
/// "not measured"; scoring treats it as the lowest bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FallRiskPhysical {
    /// Two-step stride distance in cm (divided by height before scoring).
    pub two_step_test: f64,
    /// Steps counted in 20 seconds, seated.
    pub seated_stepping_test: f64,
    /// Forward reach in cm.
    pub functional_reach: f64,
    /// Eyes-closed single-leg stand, seconds (capped at 120 on entry).
    pub closed_eye_stand: f64,
    /// Eyes-open single-leg stand, seconds (capped at 180 on entry).
    pub open_eye_stand: f64,
}

impl FallRiskPhysical {
    pub fn is_complete(&self) -> bool {
        self.two_step_test > 0.0
            && self.seated_stepping_test > 0.0
            && self.functional_reach > 0.0
            && self.closed_eye_stand > 0.0
            && self.open_eye_stand > 0.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FallRiskAssessment {
    pub questionnaire: FallRiskQuestionnaire,
    pub physical: FallRiskPhysical,
}
