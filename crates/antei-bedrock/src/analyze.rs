//! Narrative generation against the strict `NarrativeAnalysis` schema.
//!
//! The model reply is parsed with serde; anything that does not
//! deserialize into the exact shape is a `SchemaViolation`, and callers
//! substitute [`fallback_analysis`]. There is no free-text scanning of the
//! reply.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{info, warn};
use uuid::Uuid;

use antei_core::models::assessment::AssessmentData;
use antei_core::models::narrative::{
    EvaluationComments, ExerciseAdvice, ExerciseGuidance, NarrativeAnalysis,
};
use antei_core::models::result::RiskResult;

use crate::config::NarrativeConfig;
use crate::error::NarrativeError;
use crate::prompt;

/// Generate narrative commentary for a scored assessment.
pub async fn generate_analysis(
    client: &Client,
    config: &NarrativeConfig,
    data: &AssessmentData,
    result: &RiskResult,
) -> Result<NarrativeAnalysis, NarrativeError> {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, model = %config.model_id, "starting narrative analysis");

    let user_message = prompt::build_analysis_prompt(data, result);
    let response_text = invoke_converse(client, config, &user_message).await?;

    let analysis: NarrativeAnalysis = serde_json::from_str(strip_code_fence(&response_text))
        .map_err(|e| {
            NarrativeError::SchemaViolation(format!(
                "failed to parse NarrativeAnalysis: {e}. Response: {response_text}"
            ))
        })?;

    info!(request_id = %request_id, "narrative analysis complete");
    Ok(analysis)
}

/// Like [`generate_analysis`], but never fails: any error is logged and
/// replaced by the fixed fallback narrative.
pub async fn generate_analysis_or_fallback(
    client: &Client,
    config: &NarrativeConfig,
    data: &AssessmentData,
    result: &RiskResult,
) -> NarrativeAnalysis {
    match generate_analysis(client, config, data, result).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!(error = %e, "narrative analysis failed, using fallback");
            fallback_analysis()
        }
    }
}

/// The deterministic narrative used whenever the model call or schema
/// validation fails. The assessment result is complete without it.
pub fn fallback_analysis() -> NarrativeAnalysis {
    NarrativeAnalysis {
        evaluation_comments: EvaluationComments {
            fall_risk_comment: "転倒リスク評価：現在の身体機能測定結果を分析した結果、バランス能力と筋力に改善の余地があることが確認されました。特に片足立ちの安定性と歩行能力の向上が推奨されます。".to_string(),
            low_back_pain_comment: "腰痛リスク評価：現在の身体機能測定結果を分析した結果、体幹の安定性と柔軟性に改善の余地があることが確認されました。特に腰回りの筋力強化とストレッチが推奨されます。".to_string(),
        },
        exercise_guidance: ExerciseGuidance {
            fall_risk_exercises: vec![ExerciseAdvice {
                name: "片足立ち練習".to_string(),
                purpose: "転倒リスクの軽減".to_string(),
                instructions: "壁に手を軽くついて片足で30秒間立ち、左右交互に行ってください。バランスが取れるようになったら手を離して練習してください。".to_string(),
            }],
            low_back_pain_exercises: vec![ExerciseAdvice {
                name: "腰回りストレッチ".to_string(),
                purpose: "腰痛の予防と改善".to_string(),
                instructions: "仰向けに寝て両膝を抱え、腰を丸めて30秒間キープしてください。その後、膝を左右に倒して腰回りをほぐしてください。".to_string(),
            }],
        },
    }
}

/// Core invocation using the Bedrock Converse API.
async fn invoke_converse(
    client: &Client,
    config: &NarrativeConfig,
    user_message: &str,
) -> Result<String, NarrativeError> {
    let response = client
        .converse()
        .model_id(&config.model_id)
        .system(SystemContentBlock::Text(prompt::SYSTEM_PROMPT.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| NarrativeError::Invocation(e.to_string()))?,
        )
        .inference_config(
            InferenceConfiguration::builder()
                .max_tokens(config.max_tokens)
                .build(),
        )
        .send()
        .await
        .map_err(|e| NarrativeError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| NarrativeError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}

/// Tolerate a reply wrapped in a Markdown code fence despite the system
/// prompt asking for bare JSON.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
