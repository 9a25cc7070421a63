//! Tier-driven exercise selection.
//!
//! A priority policy, not a union: when fall risk is high the balance
//! bundle is chosen even if back-pain risk is also high, and the back-pain
//! bundle is silently skipped. Known product limitation kept for
//! compatibility with the existing assessment flow.

use antei_core::models::exercise::Exercise;
use antei_core::models::result::RiskLevel;

use crate::catalog;

/// Select the recommended exercise list for the computed tiers. Either
/// domain may be absent when it was not assessed.
///
/// List length: high in either domain → 8, medium in either → 5,
/// otherwise 3.
pub fn select_exercises(
    fall_risk: Option<RiskLevel>,
    low_back_pain_risk: Option<RiskLevel>,
) -> Vec<Exercise> {
    let bundle = if fall_risk == Some(RiskLevel::High) {
        fall_risk_bundle()
    } else if low_back_pain_risk == Some(RiskLevel::High) {
        low_back_pain_bundle()
    } else {
        general_bundle()
    };

    let mut selected = Vec::new();
    for exercise in bundle {
        if selected.iter().all(|e: &Exercise| e.name != exercise.name) {
            selected.push(exercise);
        }
    }
    selected.truncate(target_count(fall_risk, low_back_pain_risk));
    selected
}

fn target_count(fall: Option<RiskLevel>, back: Option<RiskLevel>) -> usize {
    let highest = fall.max(back);
    match highest {
        Some(RiskLevel::High) => 8,
        Some(RiskLevel::Medium) => 5,
        _ => 3,
    }
}

/// Balance-dominant bundle for high fall risk.
fn fall_risk_bundle() -> Vec<Exercise> {
    let mut bundle: Vec<Exercise> = catalog::single_leg_standing().to_vec();
    bundle.extend(catalog::balance_drills().iter().cloned());
    bundle.push(catalog::squats()[0].clone());
    bundle.push(catalog::squats()[2].clone());
    bundle
}

/// Core/flexibility-dominant bundle for high back-pain risk.
fn low_back_pain_bundle() -> Vec<Exercise> {
    let mut bundle: Vec<Exercise> = catalog::core_drills().to_vec();
    bundle.extend(catalog::flexibility_drills().iter().cloned());
    bundle.push(catalog::squats()[0].clone());
    bundle.push(catalog::squats()[1].clone());
    bundle
}

/// Small mixed bundle for everyone else. Progression order matters: the
/// low/low case keeps only the first three entries.
fn general_bundle() -> Vec<Exercise> {
    vec![
        catalog::squats()[0].clone(),
        catalog::single_leg_standing()[0].clone(),
        catalog::core_drills()[0].clone(),
        catalog::flexibility_drills()[1].clone(),
        catalog::balance_drills()[0].clone(),
    ]
}
