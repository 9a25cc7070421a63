use antei_bedrock::prompt::{SYSTEM_PROMPT, build_analysis_prompt};
use antei_core::models::assessment::AssessmentData;
use antei_core::models::biopsychosocial::{
    BiologicalFactors, BiopsychosocialFactors, PsychologicalFactors, SocialFactors,
};
use antei_core::models::fall_risk::{FallRiskAssessment, FallRiskPhysical, FallRiskQuestionnaire};
use antei_core::models::low_back_pain::{
    FlexibilityResult, HeadPosture, LowBackPainAssessment, LowBackPainPhysical, WaistPosture,
};
use antei_core::models::user::{AgeGroup, Gender, UserInfo};
use antei_scoring::compute_risk;

fn full_assessment() -> AssessmentData {
    AssessmentData {
        user_info: UserInfo {
            gender: Gender::Male,
            age_group: AgeGroup::Fifties,
            height_m: 1.72,
        },
        fall_risk: Some(FallRiskAssessment {
            questionnaire: FallRiskQuestionnaire {
                crowd_walking: 3,
                physical_confidence: 3,
                quick_reaction: 3,
                step_recovery: 3,
                sock_wearing: 3,
                heel_to_toe: 3,
                closed_eye_confidence: 3,
                train_standing: 3,
                open_eye_confidence: 3,
            },
            physical: FallRiskPhysical {
                two_step_test: 250.0,
                seated_stepping_test: 45.0,
                functional_reach: 38.0,
                closed_eye_stand: 0.0,
                open_eye_stand: 90.0,
            },
        }),
        low_back_pain: Some(LowBackPainAssessment {
            physical: LowBackPainPhysical {
                standing_forward_bend: FlexibilityResult::Ok,
                hip_flexion: FlexibilityResult::ToLine,
                plank_challenge: 50.0,
                wall_posture_head: HeadPosture::Normal,
                wall_posture_waist: WaistPosture::Natural,
            },
            biopsychosocial: BiopsychosocialFactors {
                biological: BiologicalFactors {
                    no_past_back_pain: true,
                    exercise_habit: false,
                    good_sleep: true,
                    no_fatigue: false,
                    stable_weight: true,
                    no_smoking: true,
                    normal_work_hours: true,
                    no_heavy_lifting: false,
                    variable_posture: false,
                    no_twisting_bending: true,
                },
                psychological: PsychologicalFactors {
                    low_stress: false,
                    good_relationships: true,
                    job_satisfaction: true,
                    manageable_workload: false,
                    good_mental_health: true,
                },
                social: SocialFactors {
                    family_support: true,
                    work_autonomy: false,
                    adequate_workspace: true,
                    varied_tasks: true,
                    safe_environment: true,
                },
            },
        }),
    }
}

#[test]
fn prompt_includes_all_measurement_sections() {
    let data = full_assessment();
    let result = compute_risk(&data);
    let prompt = build_analysis_prompt(&data, &result);

    assert!(prompt.starts_with("【年齢・性別】\n50代 男性"));
    assert!(prompt.contains("【転倒リスク評価項目】"));
    assert!(prompt.contains("- 2ステップテスト：250cm"));
    assert!(prompt.contains("【腰痛リスク評価項目】"));
    assert!(prompt.contains("- 立位体前屈：OK"));
    assert!(prompt.contains("- 腰沈み込み：点線まで"));
    assert!(prompt.contains("【BPS要因】"));
    assert!(prompt.contains("生物学的要因：6、心理的要因：3、社会的要因：4、BPS総合スコア：13"));
}

#[test]
fn prompt_marks_unmeasured_values() {
    let data = full_assessment();
    let result = compute_risk(&data);
    let prompt = build_analysis_prompt(&data, &result);
    assert!(prompt.contains("- 閉眼片足立ち：未測定"));
}

#[test]
fn prompt_reports_score_totals_with_percentages() {
    let data = full_assessment();
    let result = compute_risk(&data);
    let prompt = build_analysis_prompt(&data, &result);

    // Fall buckets: ratio 250/172≈1.45 → 60, stepping 45 → 70, reach 38
    // → 70, closed-eye 0 → 20, open-eye 90 → 70. Sum 290.
    let fall_pct = result.fall_risk.as_ref().unwrap().percentage;
    assert!(prompt.contains(&format!("→ 合計スコア：290点（リスク率：{fall_pct}%）")));
}

#[test]
fn prompt_omits_sections_for_absent_domains() {
    let mut data = full_assessment();
    data.low_back_pain = None;
    let result = compute_risk(&data);
    let prompt = build_analysis_prompt(&data, &result);

    assert!(prompt.contains("【転倒リスク評価項目】"));
    assert!(!prompt.contains("【腰痛リスク評価項目】"));
    assert!(!prompt.contains("【BPS要因】"));
}

#[test]
fn system_prompt_demands_bare_json_schema() {
    assert!(SYSTEM_PROMPT.contains("evaluation_comments"));
    assert!(SYSTEM_PROMPT.contains("exercise_guidance"));
    assert!(SYSTEM_PROMPT.contains("JSON"));
}
