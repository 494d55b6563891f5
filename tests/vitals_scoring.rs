use seo_core::vitals::{
    classify, metric_score, score_payload, PerformanceStatus, Thresholds, VitalsError,
    VitalsPayload,
};

const FCP: Thresholds = Thresholds::new(1800.0, 3000.0);

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn golden_score_at_good_boundary() {
    approx(metric_score(1800.0, FCP), 1.0);
}

#[test]
fn golden_score_at_needs_improvement_boundary() {
    approx(metric_score(3000.0, FCP), 0.7);
}

#[test]
fn golden_score_hits_floor() {
    // 0.7 - (1200 / 1200) * 0.7 == 0.0
    approx(metric_score(4200.0, FCP), 0.0);
}

#[test]
fn invariant_score_monotonically_non_increasing() {
    let mut last = f64::INFINITY;
    let mut value = 0.0;
    while value <= 6000.0 {
        let score = metric_score(value, FCP);
        assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        assert!(score <= last, "score increased at value {value}");
        last = score;
        value += 25.0;
    }
}

#[test]
fn invariant_coincident_thresholds_are_a_hard_cliff() {
    let cliff = Thresholds::new(5.0, 5.0);
    approx(metric_score(4.9, cliff), 1.0);
    approx(metric_score(5.0, cliff), 1.0);
    approx(metric_score(5.1, cliff), 0.0);
}

#[test]
fn invariant_score_never_negative_far_past_threshold() {
    approx(metric_score(1_000_000.0, FCP), 0.0);
}

#[test]
fn classify_status_boundaries() {
    assert_eq!(classify(1.0), PerformanceStatus::Good);
    assert_eq!(classify(0.9), PerformanceStatus::Good);
    assert_eq!(classify(0.89), PerformanceStatus::NeedsImprovement);
    assert_eq!(classify(0.7), PerformanceStatus::NeedsImprovement);
    assert_eq!(classify(0.69), PerformanceStatus::Poor);
    assert_eq!(classify(0.0), PerformanceStatus::Poor);
}

fn full_payload() -> VitalsPayload {
    VitalsPayload {
        lcp: Some(2000.0),
        fid: Some(50.0),
        cls: Some(0.05),
        fcp: Some(1200.0),
        tti: Some(3000.0),
        timestamp: Some(serde_json::json!(1_700_000_000_000u64)),
        url: Some("https://example.com/".to_string()),
    }
}

#[test]
fn score_payload_all_good_metrics() {
    let report = score_payload(&full_payload()).unwrap();

    assert_eq!(report.metrics.len(), 5);
    approx(report.overall_score, 1.0);
    assert_eq!(report.performance_status, PerformanceStatus::Good);
    assert_eq!(report.url, "https://example.com/");
}

#[test]
fn score_payload_rejects_missing_fields_without_partial_scoring() {
    let mut payload = full_payload();
    payload.fid = None;
    payload.url = None;

    match score_payload(&payload) {
        Err(VitalsError::MissingFields(missing)) => {
            assert_eq!(missing, vec!["fid".to_string(), "url".to_string()]);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn score_payload_rejects_empty_payload_listing_everything() {
    match score_payload(&VitalsPayload::default()) {
        Err(VitalsError::MissingFields(missing)) => {
            assert_eq!(missing.len(), 7);
            assert!(missing.contains(&"timestamp".to_string()));
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn score_payload_degraded_metrics_lower_the_status() {
    let payload = VitalsPayload {
        lcp: Some(5000.0), // past needs-improvement
        fid: Some(400.0),  // past needs-improvement
        cls: Some(0.3),    // past needs-improvement
        fcp: Some(3500.0), // past needs-improvement
        tti: Some(8000.0), // past needs-improvement
        ..full_payload()
    };
    let report = score_payload(&payload).unwrap();
    assert_eq!(report.performance_status, PerformanceStatus::Poor);
    assert!(report.overall_score < 0.7);
}

#[test]
fn golden_report_serialization_shape() {
    let report = score_payload(&full_payload()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["performanceStatus"], "good");
    assert_eq!(json["overallScore"], 1.0);
    assert_eq!(json["metrics"][0]["metric"], "lcp");
    assert_eq!(json["metrics"][0]["rawValue"], 2000.0);
    assert_eq!(json["metrics"][0]["thresholds"]["needsImprovement"], 4000.0);
}

#[test]
fn payload_deserializes_from_beacon_json() {
    let payload: VitalsPayload = serde_json::from_str(
        r#"{"lcp": 2100, "fid": 80, "cls": 0.08, "fcp": 1500, "tti": 3600,
            "timestamp": "2026-08-24T12:00:00Z", "url": "https://example.com/blog"}"#,
    )
    .unwrap();
    let report = score_payload(&payload).unwrap();
    assert_eq!(report.performance_status, PerformanceStatus::Good);
}
