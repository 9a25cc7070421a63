//! Bucket mappers for the five official MHLW fall-risk tests.
//!
//! Each mapper takes the raw measurement and returns a point score from
//! the discrete set {20, 40, 60, 70, 90}. Thresholds are inclusive lower
//! bounds; anything below the lowest threshold (including 0 for "not
//! measured" and NaN) lands in the 20-point bucket.

use antei_core::models::fall_risk::FallRiskPhysical;

/// 2ステップテスト. Input is the stride/height *ratio*, not raw
/// centimeters — see [`fall_test_scores`] for the normalization.
pub fn score_two_step_ratio(ratio: f64) -> u32 {
    if ratio >= 1.66 {
        90
    } else if ratio >= 1.47 {
        70
    } else if ratio >= 1.39 {
        60
    } else if ratio >= 1.25 {
        40
    } else {
        20
    }
}

/// 座位ステッピングテスト, steps in 20 seconds.
pub fn score_seated_stepping(count: f64) -> u32 {
    if count >= 48.0 {
        90
    } else if count >= 44.0 {
        70
    } else if count >= 29.0 {
        60
    } else if count >= 25.0 {
        40
    } else {
        20
    }
}

/// ファンクショナルリーチ, cm.
pub fn score_functional_reach(cm: f64) -> u32 {
    if cm >= 40.0 {
        90
    } else if cm >= 36.0 {
        70
    } else if cm >= 30.0 {
        60
    } else if cm >= 20.0 {
        40
    } else {
        20
    }
}

/// 閉眼片足立ち, seconds.
pub fn score_closed_eye_stand(seconds: f64) -> u32 {
    if seconds >= 90.1 {
        90
    } else if seconds >= 55.1 {
        70
    } else if seconds >= 17.1 {
        60
    } else if seconds >= 7.1 {
        40
    } else {
        20
    }
}

/// 開眼片足立ち, seconds.
pub fn score_open_eye_stand(seconds: f64) -> u32 {
    if seconds >= 120.1 {
        90
    } else if seconds >= 84.1 {
        70
    } else if seconds >= 30.1 {
        60
    } else if seconds >= 15.1 {
        40
    } else {
        20
    }
}

/// Score all five tests, in measurement-sheet order. The two-step stride
/// is normalized by body height (in cm) here so callers pass raw values.
pub fn fall_test_scores(physical: &FallRiskPhysical, height_m: f64) -> [u32; 5] {
    let height_cm = height_m * 100.0;
    let ratio = if height_cm > 0.0 {
        physical.two_step_test / height_cm
    } else {
        0.0
    };
    [
        score_two_step_ratio(ratio),
        score_seated_stepping(physical.seated_stepping_test),
        score_functional_reach(physical.functional_reach),
        score_closed_eye_stand(physical.closed_eye_stand),
        score_open_eye_stand(physical.open_eye_stand),
    ]
}
