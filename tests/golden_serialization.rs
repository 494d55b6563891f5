use chrono::{TimeZone, Utc};
use seo_core::types::{KeywordRecord, RelatedQuery, RelatedTopic, Timeframe, TrendRecord};

#[test]
fn golden_keyword_record_wire_shape() {
    let record = KeywordRecord {
        keyword: "custom software development company".into(),
        search_volume: 5_000,
        trend_strength: 60.0,
        difficulty: 71,
        opportunity_score: 46.33,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["keyword"], "custom software development company");
    assert_eq!(json["searchVolume"], 5_000);
    assert_eq!(json["trendStrength"], 60.0);
    assert_eq!(json["difficulty"], 71);
    assert_eq!(json["opportunityScore"], 46.33);
}

#[test]
fn golden_trend_record_round_trip() {
    let record = TrendRecord {
        keyword: "ai development".into(),
        trend: 88,
        search_volume: 27_500,
        related_queries: vec![
            RelatedQuery { query: "best ai development tools".into(), value: 90 },
            RelatedQuery { query: "ai development tutorial".into(), value: 55 },
        ],
        related_topics: vec![
            RelatedTopic { topic: "Software development".into(), value: 80 },
            RelatedTopic { topic: "Cloud computing".into(), value: 42 },
        ],
        timeframe: Timeframe::default(),
        last_updated: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["searchVolume"], 27_500);
    assert_eq!(json["relatedQueries"][0]["query"], "best ai development tools");
    assert_eq!(json["relatedTopics"][1]["value"], 42);
    assert_eq!(json["timeframe"], "12");
    assert_eq!(json["lastUpdated"], "2023-11-14T22:13:20Z");

    let back: TrendRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
