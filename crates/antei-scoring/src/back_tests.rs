//! Bucket mappers for the four low-back-pain tests.

use antei_core::models::low_back_pain::{
    FlexibilityResult, HeadPosture, LowBackPainPhysical, WaistPosture,
};

/// 立位体前屈 / 腰沈み込みテスト share the same three-label scale.
pub fn score_flexibility(result: FlexibilityResult) -> u32 {
    match result {
        FlexibilityResult::Ok => 90,
        FlexibilityResult::ToLine => 60,
        _ => 20,
    }
}

/// プランクチャレンジ, seconds held.
pub fn score_plank(seconds: f64) -> u32 {
    if seconds >= 90.0 {
        90
    } else if seconds >= 60.0 {
        80
    } else if seconds >= 45.0 {
        60
    } else if seconds >= 30.0 {
        40
    } else {
        20
    }
}

/// 壁姿勢チェック: one score for the (head, waist) label pair.
///
/// All nine defined combinations are listed explicitly; an unrecognized
/// label in either position falls through to 20.
pub fn score_wall_posture(head: HeadPosture, waist: WaistPosture) -> u32 {
    use HeadPosture::{ChinUp, Forward, Normal};
    use WaistPosture::{Excessive, Flat, Natural};

    match (head, waist) {
        (Normal, Natural) => 90,
        (Normal, Excessive) => 60,
        (Normal, Flat) => 60,
        (Forward, Natural) => 60,
        (Forward, Excessive) => 40,
        (Forward, Flat) => 40,
        (ChinUp, Natural) => 60,
        (ChinUp, Excessive) => 40,
        (ChinUp, Flat) => 20,
        _ => 20,
    }
}

/// Score all four tests, in measurement-sheet order.
pub fn back_test_scores(physical: &LowBackPainPhysical) -> [u32; 4] {
    [
        score_flexibility(physical.standing_forward_bend),
        score_flexibility(physical.hip_flexion),
        score_plank(physical.plank_challenge),
        score_wall_posture(physical.wall_posture_head, physical.wall_posture_waist),
    ]
}
