use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::fall_risk::FallRiskAssessment;
use super::low_back_pain::LowBackPainAssessment;
use super::user::UserInfo;

/// A complete snapshot handed to the scoring engine. `user_info` is
/// mandatory; each domain sub-object is either fully present or absent —
/// the wizard withholds submission until a sub-object is complete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentData {
    pub user_info: UserInfo,
    pub fall_risk: Option<FallRiskAssessment>,
    pub low_back_pain: Option<LowBackPainAssessment>,
}

/// Assessment-in-progress across wizard steps. Every update returns a new
/// draft; nothing in the engine mutates shared state. Restart discards all
/// answers and issues a fresh session id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDraft {
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
    pub user_info: Option<UserInfo>,
    pub fall_risk: Option<FallRiskAssessment>,
    pub low_back_pain: Option<LowBackPainAssessment>,
}

impl AssessmentDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            user_info: None,
            fall_risk: None,
            low_back_pain: None,
        }
    }

    pub fn with_user_info(self, user_info: UserInfo) -> Self {
        Self {
            user_info: Some(user_info),
            ..self
        }
    }

    pub fn with_fall_risk(self, fall_risk: FallRiskAssessment) -> Self {
        Self {
            fall_risk: Some(fall_risk),
            ..self
        }
    }

    pub fn with_low_back_pain(self, low_back_pain: LowBackPainAssessment) -> Self {
        Self {
            low_back_pain: Some(low_back_pain),
            ..self
        }
    }

    pub fn restart(&self) -> Self {
        Self::new()
    }

    /// Freeze the draft into the snapshot the engine scores. Fails only
    /// when the intake step was never completed.
    pub fn complete(&self) -> Result<AssessmentData, CoreError> {
        let user_info = self
            .user_info
            .ok_or(CoreError::IncompleteAssessment("user_info"))?;
        Ok(AssessmentData {
            user_info,
            fall_risk: self.fall_risk,
            low_back_pain: self.low_back_pain,
        })
    }
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self::new()
    }
}
