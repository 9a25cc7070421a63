use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::biopsychosocial::BiopsychosocialFactors;

/// Outcome of the two flexibility tests (standing forward bend, hip
/// flexion). Labels match the measurement sheet; anything the sheet does
/// not define scores as the lowest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FlexibilityResult {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "点線まで")]
    ToLine,
    #[serde(rename = "かたい")]
    Stiff,
    #[serde(other)]
    Unrecognized,
}

impl FlexibilityResult {
    pub fn label(&self) -> &'static str {
        match self {
            FlexibilityResult::Ok => "OK",
            FlexibilityResult::ToLine => "点線まで",
            FlexibilityResult::Stiff => "かたい",
            FlexibilityResult::Unrecognized => "未測定",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HeadPosture {
    #[serde(rename = "正常")]
    Normal,
    #[serde(rename = "前方突出")]
    Forward,
    #[serde(rename = "顎上がり")]
    ChinUp,
    #[serde(other)]
    Unrecognized,
}

impl HeadPosture {
    pub fn label(&self) -> &'static str {
        match self {
            HeadPosture::Normal => "正常",
            HeadPosture::Forward => "前方突出",
            HeadPosture::ChinUp => "顎上がり",
            HeadPosture::Unrecognized => "未測定",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WaistPosture {
    #[serde(rename = "自然なカーブ")]
    Natural,
    #[serde(rename = "過度なカーブ")]
    Excessive,
    #[serde(rename = "平坦")]
    Flat,
    #[serde(other)]
    Unrecognized,
}

impl WaistPosture {
    pub fn label(&self) -> &'static str {
        match self {
            WaistPosture::Natural => "自然なカーブ",
            WaistPosture::Excessive => "過度なカーブ",
            WaistPosture::Flat => "平坦",
            WaistPosture::Unrecognized => "未測定",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowBackPainPhysical {
    /// 立位体前屈
    pub standing_forward_bend: FlexibilityResult,
    /// 腰沈み込みテスト
    pub hip_flexion: FlexibilityResult,
    /// プランクチャレンジ, seconds (0–60 on the entry form).
    pub plank_challenge: f64,
    /// 壁姿勢チェック（あたま）
    pub wall_posture_head: HeadPosture,
    /// 壁姿勢チェック（こし）
    pub wall_posture_waist: WaistPosture,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowBackPainAssessment {
    pub physical: LowBackPainPhysical,
    pub biopsychosocial: BiopsychosocialFactors,
}
