//! Physiotherapist prompt assembly.
//!
//! Builds the structured Japanese prompt the narrative model receives:
//! intake metadata, per-test raw values with bucketed totals, and the
//! biopsychosocial factor counts. The reply contract lives in the system
//! prompt — the model must return a `NarrativeAnalysis` JSON object and
//! nothing else.

use antei_core::models::assessment::AssessmentData;
use antei_core::models::result::RiskResult;
use antei_scoring::{back_tests, fall_tests};

pub const SYSTEM_PROMPT: &str = "\
あなたは理学療法士です。以下の身体機能測定結果に基づき、評価コメントと運動指導を作成してください。\n\
回答は次の構造のJSONオブジェクトのみを返してください。前置きやコードフェンスは不要です。\n\
{\n\
  \"evaluation_comments\": {\n\
    \"fall_risk_comment\": \"転倒リスクについて150文字以内の総合コメント\",\n\
    \"low_back_pain_comment\": \"腰痛リスクについて150文字以内の総合コメント\"\n\
  },\n\
  \"exercise_guidance\": {\n\
    \"fall_risk_exercises\": [{\"name\": \"種目名\", \"purpose\": \"目的\", \"instructions\": \"実施ポイント\"}],\n\
    \"low_back_pain_exercises\": [{\"name\": \"種目名\", \"purpose\": \"目的\", \"instructions\": \"実施ポイント\"}]\n\
  }\n\
}\n\
運動はリスク傾向に合わせてそれぞれ2〜3種類提案してください。";

/// Build the user message from one assessment snapshot and its result.
pub fn build_analysis_prompt(data: &AssessmentData, result: &RiskResult) -> String {
    let mut prompt = format!(
        "【年齢・性別】\n{} {}\n\n",
        data.user_info.age_group.label(),
        data.user_info.gender_label(),
    );

    if let Some(assessment) = &data.fall_risk {
        let physical = &assessment.physical;
        let sum: u32 = fall_tests::fall_test_scores(physical, data.user_info.height_m)
            .iter()
            .sum();

        prompt.push_str("【転倒リスク評価項目】\n");
        prompt.push_str(&format!(
            "- 2ステップテスト：{}\n",
            measurement(physical.two_step_test, "cm")
        ));
        prompt.push_str(&format!(
            "- 座位ステッピング：{}\n",
            measurement(physical.seated_stepping_test, "回")
        ));
        prompt.push_str(&format!(
            "- ファンクショナルリーチ：{}\n",
            measurement(physical.functional_reach, "cm")
        ));
        prompt.push_str(&format!(
            "- 閉眼片足立ち：{}\n",
            measurement(physical.closed_eye_stand, "秒")
        ));
        prompt.push_str(&format!(
            "- 開眼片足立ち：{}\n",
            measurement(physical.open_eye_stand, "秒")
        ));

        match &result.fall_risk {
            Some(risk) => prompt.push_str(&format!(
                "→ 合計スコア：{sum}点（リスク率：{}%）\n\n",
                risk.percentage
            )),
            None => prompt.push_str(&format!("→ 合計スコア：{sum}点\n\n")),
        }
    }

    if let Some(assessment) = &data.low_back_pain {
        let physical = &assessment.physical;
        let sum: u32 = back_tests::back_test_scores(physical).iter().sum();

        prompt.push_str("【腰痛リスク評価項目】\n");
        prompt.push_str(&format!(
            "- 立位体前屈：{}\n",
            physical.standing_forward_bend.label()
        ));
        prompt.push_str(&format!("- 腰沈み込み：{}\n", physical.hip_flexion.label()));
        prompt.push_str(&format!(
            "- プランクチャレンジ：{}\n",
            measurement(physical.plank_challenge, "秒")
        ));
        prompt.push_str(&format!(
            "- 壁姿勢テスト（頭）：{}\n",
            physical.wall_posture_head.label()
        ));
        prompt.push_str(&format!(
            "- 壁姿勢テスト（腰）：{}\n",
            physical.wall_posture_waist.label()
        ));

        match &result.low_back_pain {
            Some(risk) => prompt.push_str(&format!(
                "→ 合計スコア：{sum}点（リスク率：{}%）\n\n",
                risk.percentage
            )),
            None => prompt.push_str(&format!("→ 合計スコア：{sum}点\n\n")),
        }

        let (biological, psychological, social) = assessment.biopsychosocial.present_counts();
        prompt.push_str("【BPS要因】\n");
        prompt.push_str(&format!(
            "生物学的要因：{biological}、心理的要因：{psychological}、社会的要因：{social}、BPS総合スコア：{}\n\n",
            u16::from(biological) + u16::from(psychological) + u16::from(social)
        ));
    }

    prompt.push_str("---\n\n");
    prompt.push_str(
        "①「転倒リスク」と「腰痛リスク」それぞれについて、現状の良否、注意点、改善の方向性を明確にしたコメントを作成してください。\n",
    );
    prompt.push_str("② 上記のリスク傾向に合わせた運動指導を作成してください。");

    prompt
}

fn measurement(value: f64, unit: &str) -> String {
    if value > 0.0 {
        format!("{value}{unit}")
    } else {
        "未測定".to_string()
    }
}
