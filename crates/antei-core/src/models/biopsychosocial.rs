use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Twenty protective-factor flags. Each `true` means the factor is
/// present (protective); flags are independent of each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiopsychosocialFactors {
    pub biological: BiologicalFactors,
    pub psychological: PsychologicalFactors,
    pub social: SocialFactors,
}

impl BiopsychosocialFactors {
    /// Count of present protective factors per sub-category, in
    /// (biological, psychological, social) order.
    pub fn present_counts(&self) -> (u8, u8, u8) {
        (
            self.biological.present_count(),
            self.psychological.present_count(),
            self.social.present_count(),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiologicalFactors {
    pub no_past_back_pain: bool,
    pub exercise_habit: bool,
    pub good_sleep: bool,
    pub no_fatigue: bool,
    pub stable_weight: bool,
    pub no_smoking: bool,
    pub normal_work_hours: bool,
    pub no_heavy_lifting: bool,
    pub variable_posture: bool,
    pub no_twisting_bending: bool,
}

impl BiologicalFactors {
    pub fn present_count(&self) -> u8 {
        [
            self.no_past_back_pain,
            self.exercise_habit,
            self.good_sleep,
            self.no_fatigue,
            self.stable_weight,
            self.no_smoking,
            self.normal_work_hours,
            self.no_heavy_lifting,
            self.variable_posture,
            self.no_twisting_bending,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PsychologicalFactors {
    pub low_stress: bool,
    pub good_relationships: bool,
    pub job_satisfaction: bool,
    pub manageable_workload: bool,
    pub good_mental_health: bool,
}

impl PsychologicalFactors {
    pub fn present_count(&self) -> u8 {
        [
            self.low_stress,
            self.good_relationships,
            self.job_satisfaction,
            self.manageable_workload,
            self.good_mental_health,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SocialFactors {
    pub family_support: bool,
    pub work_autonomy: bool,
    pub adequate_workspace: bool,
    pub varied_tasks: bool,
    pub safe_environment: bool,
}

impl SocialFactors {
    pub fn present_count(&self) -> u8 {
        [
            self.family_support,
            self.work_autonomy,
            self.adequate_workspace,
            self.varied_tasks,
            self.safe_environment,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u8
    }
}
