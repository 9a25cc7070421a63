use antei_core::models::result::RiskLevel;
use antei_scoring::classify::{back_pain_comment, classify, fall_risk_comment};

#[test]
fn tier_boundaries_exact() {
    assert_eq!(classify(0), RiskLevel::Low);
    assert_eq!(classify(49), RiskLevel::Low);
    assert_eq!(classify(50), RiskLevel::Medium);
    assert_eq!(classify(79), RiskLevel::Medium);
    assert_eq!(classify(80), RiskLevel::High);
    assert_eq!(classify(100), RiskLevel::High);
}

#[test]
fn comments_differ_per_domain() {
    for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
        assert_ne!(fall_risk_comment(level), back_pain_comment(level));
        assert!(!fall_risk_comment(level).is_empty());
        assert!(!back_pain_comment(level).is_empty());
    }
}

#[test]
fn high_tier_advises_professional_intervention() {
    assert!(fall_risk_comment(RiskLevel::High).contains("専門家"));
    assert!(back_pain_comment(RiskLevel::High).contains("専門家"));
}
