use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::Timeframe;

/// A fully scored keyword, as returned by the opportunity pipeline.
///
/// Field names serialize in camelCase because these records cross the HTTP
/// boundary unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    pub keyword: String,
    pub search_volume: u64,
    /// Trend strength in [0, 100].
    pub trend_strength: f64,
    /// Difficulty estimate in [0, 100].
    pub difficulty: u32,
    /// Composite opportunity score in [0, 100].
    pub opportunity_score: f64,
}

/// A related search query suggestion with its relative interest value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedQuery {
    pub query: String,
    pub value: u32,
}

/// A related topic suggestion with its relative interest value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTopic {
    pub topic: String,
    pub value: u32,
}

/// A synthesized trend snapshot for one keyword over one timeframe.
///
/// Invariant: `related_queries` and `related_topics` are sorted non-ascending
/// by `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub keyword: String,
    /// Trend strength in [0, 100].
    pub trend: u32,
    /// Estimated monthly search volume; never below 1000.
    pub search_volume: u64,
    pub related_queries: Vec<RelatedQuery>,
    pub related_topics: Vec<RelatedTopic>,
    pub timeframe: Timeframe,
    pub last_updated: DateTime<Utc>,
}
