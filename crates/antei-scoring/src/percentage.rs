//! Affine transform from a bucketed-score sum to a 5–95% risk percentage.
//!
//! Higher test performance means lower risk, so the sum is inverted and
//! rescaled onto the 5–95 band. The extremes are reserved: the tool never
//! claims 0% or 100% risk. Clamping stays in place even though the map is
//! range-bound by construction, so a future threshold edit cannot push the
//! result outside the band.

/// Fall domain: 5 tests, achievable sum 100–450.
pub fn fall_risk_percentage(score_sum: u32) -> u8 {
    percentage(score_sum, 350.0)
}

/// Back-pain domain: 4 tests, achievable sum 100–360.
pub fn back_pain_risk_percentage(score_sum: u32) -> u8 {
    percentage(score_sum, 260.0)
}

fn percentage(score_sum: u32, span: f64) -> u8 {
    let percent = (1.0 - (score_sum as f64 - 100.0) / span) * 90.0 + 5.0;
    percent.round().clamp(5.0, 95.0) as u8
}
