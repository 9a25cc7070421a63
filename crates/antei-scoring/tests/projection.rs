use antei_core::models::fall_risk::FallRiskQuestionnaire;
use antei_scoring::projection::{fall_risk_scores, physical_rating, self_assessment_rating};

fn questionnaire(answer: u8) -> FallRiskQuestionnaire {
    FallRiskQuestionnaire {
        crowd_walking: answer,
        physical_confidence: answer,
        quick_reaction: answer,
        step_recovery: answer,
        sock_wearing: answer,
        heel_to_toe: answer,
        closed_eye_confidence: answer,
        train_standing: answer,
        open_eye_confidence: answer,
    }
}

#[test]
fn self_rating_percentage_buckets() {
    assert_eq!(self_assessment_rating(&[5, 5]), 5);
    assert_eq!(self_assessment_rating(&[4, 4]), 5); // exactly 80%
    assert_eq!(self_assessment_rating(&[3, 3]), 4); // exactly 60%
    assert_eq!(self_assessment_rating(&[2, 2]), 3); // exactly 40%
    assert_eq!(self_assessment_rating(&[1, 1]), 2); // exactly 20%
    assert_eq!(self_assessment_rating(&[0, 0]), 1);
    assert_eq!(self_assessment_rating(&[]), 1);
}

#[test]
fn self_rating_single_item_group() {
    assert_eq!(self_assessment_rating(&[5]), 5);
    assert_eq!(self_assessment_rating(&[3]), 4);
    assert_eq!(self_assessment_rating(&[1]), 2);
}

#[test]
fn physical_rating_rebuckets_averages() {
    assert_eq!(physical_rating(90.0), 5);
    assert_eq!(physical_rating(80.0), 4);
    assert_eq!(physical_rating(70.0), 4);
    assert_eq!(physical_rating(65.0), 3);
    assert_eq!(physical_rating(55.0), 2);
    assert_eq!(physical_rating(30.0), 1);
}

#[test]
fn projection_pairs_adjacent_tests_with_wraparound() {
    let scores = fall_risk_scores(&questionnaire(5), [20, 90, 90, 90, 90]);

    // Pair averages: (20+90)/2, (90+90)/2, ×2, (90+20)/2.
    assert_eq!(scores.physical.walking_ability, 2);
    assert_eq!(scores.physical.agility, 5);
    assert_eq!(scores.physical.dynamic_balance, 5);
    assert_eq!(scores.physical.static_balance_closed, 5);
    assert_eq!(scores.physical.static_balance_open, 2);

    assert_eq!(scores.self_assessment.walking_ability, 5);
    assert_eq!(scores.self_assessment.static_balance_closed, 5);
}

#[test]
fn projection_is_scaled_one_to_five() {
    for answer in 0..=5 {
        let scores = fall_risk_scores(&questionnaire(answer), [20, 40, 60, 70, 90]);
        let all = [
            scores.physical.walking_ability,
            scores.physical.agility,
            scores.physical.dynamic_balance,
            scores.physical.static_balance_closed,
            scores.physical.static_balance_open,
            scores.self_assessment.walking_ability,
            scores.self_assessment.agility,
            scores.self_assessment.dynamic_balance,
            scores.self_assessment.static_balance_closed,
            scores.self_assessment.static_balance_open,
        ];
        assert!(all.iter().all(|r| (1..=5).contains(r)));
    }
}
