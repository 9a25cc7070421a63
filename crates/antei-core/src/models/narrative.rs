use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The structured reply the narrative model must return. The Bedrock
/// collaborator rejects anything that does not deserialize into this
/// exact shape — there is no free-text scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeAnalysis {
    pub evaluation_comments: EvaluationComments,
    pub exercise_guidance: ExerciseGuidance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationComments {
    pub fall_risk_comment: String,
    pub low_back_pain_comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseGuidance {
    pub fall_risk_exercises: Vec<ExerciseAdvice>,
    pub low_back_pain_exercises: Vec<ExerciseAdvice>,
}

/// A model-suggested exercise. Free text, not validated against the
/// static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseAdvice {
    pub name: String,
    pub purpose: String,
    pub instructions: String,
}
