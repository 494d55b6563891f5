use crate::keyword::difficulty::difficulty;
use crate::types::KeywordRecord;

/// Composite 0–100 opportunity score for a keyword.
///
/// Volume, trend, and inverted difficulty contribute with equal weight: high
/// demand and momentum raise the score, high competitiveness lowers it.
/// Volume saturates at 10,000 monthly searches (`volume / 100` capped at
/// 100), trend saturates at 100.
pub fn opportunity(keyword: &str, search_volume: u64, trend: f64) -> f64 {
    let volume_score = (search_volume as f64 / 100.0).min(100.0);
    let trend_score = trend.min(100.0);
    let difficulty_score = f64::from(difficulty(keyword));

    let score = (volume_score + trend_score + (100.0 - difficulty_score)) / 3.0;
    let clamped = score.clamp(0.0, 100.0);
    debug_assert!(
        (0.0..=100.0).contains(&clamped),
        "opportunity {clamped} out of range [0, 100]"
    );
    clamped
}

/// Score a keyword and assemble the full record the opportunity endpoints
/// serialize.
pub fn score_keyword(keyword: &str, search_volume: u64, trend: f64) -> KeywordRecord {
    KeywordRecord {
        keyword: keyword.to_string(),
        search_volume,
        trend_strength: trend.clamp(0.0, 100.0),
        difficulty: difficulty(keyword),
        opportunity_score: opportunity(keyword, search_volume, trend),
    }
}
