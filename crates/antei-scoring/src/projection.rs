//! The dual-axis competency projection for the radar chart.
//!
//! Two independent 1–5 ratings per competency group: one derived from the
//! questionnaire answers, one from the bucketed test scores. Display data
//! only — classification never reads it.

use antei_core::models::fall_risk::FallRiskQuestionnaire;
use antei_core::models::result::{CompetencyRatings, FallRiskScores};

/// Rate one competency group from its Likert answers, as a percentage of
/// the maximum achievable sum.
pub fn self_assessment_rating(answers: &[u8]) -> u8 {
    if answers.is_empty() {
        return 1;
    }
    let sum: u32 = answers.iter().map(|&a| u32::from(a)).sum();
    let ratio = sum as f64 / (answers.len() as f64 * 5.0);
    if ratio >= 0.8 {
        5
    } else if ratio >= 0.6 {
        4
    } else if ratio >= 0.4 {
        3
    } else if ratio >= 0.2 {
        2
    } else {
        1
    }
}

/// Re-bucket an averaged test score onto the 1–5 scale.
pub fn physical_rating(averaged_score: f64) -> u8 {
    if averaged_score >= 90.0 {
        5
    } else if averaged_score >= 70.0 {
        4
    } else if averaged_score >= 60.0 {
        3
    } else if averaged_score >= 40.0 {
        2
    } else {
        1
    }
}

/// Build the projection for the five competency groups.
///
/// Each group's physical rating averages two adjacent bucketed test scores
/// over the measurement-sheet order, wrapping at the end so every test
/// feeds exactly two groups.
pub fn fall_risk_scores(
    questionnaire: &FallRiskQuestionnaire,
    test_scores: [u32; 5],
) -> FallRiskScores {
    let groups = questionnaire.groups();
    let self_ratings: Vec<u8> = groups.iter().map(|g| self_assessment_rating(g)).collect();

    let physical_ratings: Vec<u8> = (0..5)
        .map(|i| {
            let pair_avg = (test_scores[i] + test_scores[(i + 1) % 5]) as f64 / 2.0;
            physical_rating(pair_avg)
        })
        .collect();

    FallRiskScores {
        physical: ratings_from(&physical_ratings),
        self_assessment: ratings_from(&self_ratings),
    }
}

fn ratings_from(values: &[u8]) -> CompetencyRatings {
    CompetencyRatings {
        walking_ability: values[0],
        agility: values[1],
        dynamic_balance: values[2],
        static_balance_closed: values[3],
        static_balance_open: values[4],
    }
}
