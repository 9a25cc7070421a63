use antei_bedrock::analyze::{fallback_analysis, strip_code_fence};
use antei_core::models::narrative::NarrativeAnalysis;

const WELL_FORMED: &str = r#"{
  "evaluation_comments": {
    "fall_risk_comment": "バランス能力は良好です。",
    "low_back_pain_comment": "体幹の安定性に改善の余地があります。"
  },
  "exercise_guidance": {
    "fall_risk_exercises": [
      {"name": "片足立ち", "purpose": "バランス強化", "instructions": "左右30秒ずつ。"}
    ],
    "low_back_pain_exercises": [
      {"name": "プランク", "purpose": "体幹強化", "instructions": "30秒キープ。"}
    ]
  }
}"#;

#[test]
fn well_formed_reply_parses() {
    let analysis: NarrativeAnalysis = serde_json::from_str(WELL_FORMED).unwrap();
    assert_eq!(
        analysis.exercise_guidance.fall_risk_exercises[0].name,
        "片足立ち"
    );
}

#[test]
fn reply_missing_a_section_is_rejected() {
    let truncated = r#"{"evaluation_comments": {"fall_risk_comment": "a", "low_back_pain_comment": "b"}}"#;
    assert!(serde_json::from_str::<NarrativeAnalysis>(truncated).is_err());
}

#[test]
fn free_text_reply_is_rejected() {
    let chatty = "①転倒リスクについて：バランス能力は概ね良好です。";
    assert!(serde_json::from_str::<NarrativeAnalysis>(chatty).is_err());
}

#[test]
fn code_fence_is_stripped_before_parsing() {
    let fenced = format!("```json\n{WELL_FORMED}\n```");
    let analysis: NarrativeAnalysis = serde_json::from_str(strip_code_fence(&fenced)).unwrap();
    assert_eq!(
        analysis.exercise_guidance.low_back_pain_exercises[0].name,
        "プランク"
    );

    // Bare text passes through untouched.
    assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
}

#[test]
fn fallback_is_deterministic_and_complete() {
    let first = fallback_analysis();
    let second = fallback_analysis();
    assert_eq!(first, second);

    assert!(!first.evaluation_comments.fall_risk_comment.is_empty());
    assert!(!first.evaluation_comments.low_back_pain_comment.is_empty());
    assert_eq!(first.exercise_guidance.fall_risk_exercises.len(), 1);
    assert_eq!(first.exercise_guidance.low_back_pain_exercises.len(), 1);
}
