use serde::{Deserialize, Serialize};

/// Lookback window for trend synthesis, in months.
///
/// Kept as an opaque string because it is passed through verbatim from the
/// query string and back out in the record payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeframe(String);

impl Timeframe {
    pub fn new(raw: impl Into<String>) -> Self {
        Timeframe(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe("12".into())
    }
}

/// Cache key for a synthesized trend record.
///
/// Two lookups hit the same entry exactly when both the keyword and the
/// timeframe match; the keyword is taken as-is (no case folding, matching the
/// scorer's case-sensitive treatment of keywords).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendKey(String);

impl TrendKey {
    pub fn new(keyword: &str, timeframe: &Timeframe) -> Self {
        TrendKey(format!("{}:{}", keyword, timeframe.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
