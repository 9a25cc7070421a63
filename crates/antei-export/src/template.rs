//! The built-in report template (Jinja2 syntax, Markdown-subset output).
//!
//! Section order mirrors the results page: summary, detailed fall scores,
//! recommendations, exercises, then the optional AI analysis.

pub const DEFAULT_TEMPLATE_NAME: &str = "health_report";

pub const DEFAULT_REPORT_TEMPLATE: &str = r#"# {{ title }}

作成日: {{ generated_on }} / 対象: {{ age_group }} {{ gender }}

## リスク評価サマリー

{% if fall_risk -%}
**転倒リスク:** {{ fall_risk.level_label }}（{{ fall_risk.percentage }}%）

{{ fall_risk.comment }}
{%- endif %}

{% if low_back_pain -%}
**腰痛リスク:** {{ low_back_pain.level_label }}（{{ low_back_pain.percentage }}%）

{{ low_back_pain.comment }}
{%- endif %}

{% if fall_risk_scores -%}
## 転倒リスク詳細スコア

- 歩行能力・筋力: 測定 {{ fall_risk_scores.physical.walking_ability }} / 自己評価 {{ fall_risk_scores.self_assessment.walking_ability }}
- 敏捷性: 測定 {{ fall_risk_scores.physical.agility }} / 自己評価 {{ fall_risk_scores.self_assessment.agility }}
- 動的バランス: 測定 {{ fall_risk_scores.physical.dynamic_balance }} / 自己評価 {{ fall_risk_scores.self_assessment.dynamic_balance }}
- 静的バランス（閉眼）: 測定 {{ fall_risk_scores.physical.static_balance_closed }} / 自己評価 {{ fall_risk_scores.self_assessment.static_balance_closed }}
- 静的バランス（開眼）: 測定 {{ fall_risk_scores.physical.static_balance_open }} / 自己評価 {{ fall_risk_scores.self_assessment.static_balance_open }}
{%- endif %}

## 推奨事項

{% for recommendation in recommendations -%}
- {{ recommendation }}
{% endfor %}

## 推奨エクササイズ

{% for exercise in exercises -%}
### {{ exercise.name }}

{{ exercise.description }}

{% for step in exercise.instructions -%}
- {{ step }}
{% endfor %}
{% endfor %}

{%- if narrative %}
---

## AI分析

### 転倒リスク評価コメント

{{ narrative.evaluation_comments.fall_risk_comment }}

### 腰痛リスク評価コメント

{{ narrative.evaluation_comments.low_back_pain_comment }}

### 運動指導（転倒予防）

{% for advice in narrative.exercise_guidance.fall_risk_exercises -%}
- **{{ advice.name }}**（{{ advice.purpose }}）: {{ advice.instructions }}
{% endfor %}

### 運動指導（腰痛予防）

{% for advice in narrative.exercise_guidance.low_back_pain_exercises -%}
- **{{ advice.name }}**（{{ advice.purpose }}）: {{ advice.instructions }}
{% endfor %}
{%- endif %}

本レポートはスクリーニング目的の参考情報であり、医学的診断ではありません。
"#;
