use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vitals::thresholds::{self, Thresholds};

#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Raw measurement payload as posted by the browser beacon. Every field is
/// optional at the wire level; [`score_payload`] rejects incomplete samples.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VitalsPayload {
    pub lcp: Option<f64>,
    pub fid: Option<f64>,
    pub cls: Option<f64>,
    pub fcp: Option<f64>,
    pub tti: Option<f64>,
    /// Opaque: numeric epoch or ISO string depending on the client.
    pub timestamp: Option<serde_json::Value>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsMetricResult {
    pub metric: String,
    pub raw_value: f64,
    /// Continuous score in [0.0, 1.0].
    pub score: f64,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceStatus {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs-improvement")]
    NeedsImprovement,
    #[serde(rename = "poor")]
    Poor,
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceStatus::Good => "good",
            PerformanceStatus::NeedsImprovement => "needs-improvement",
            PerformanceStatus::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Scored sample, shaped for the handler's `{success, data}` envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReport {
    pub url: String,
    pub timestamp: serde_json::Value,
    pub metrics: Vec<VitalsMetricResult>,
    /// Mean of the five metric scores, in [0.0, 1.0].
    pub overall_score: f64,
    pub performance_status: PerformanceStatus,
}

/// Score a single metric value against its thresholds.
///
/// Piecewise linear with a soft knee: 1.0 up to `good`, degrading to 0.7 at
/// `needs_improvement`, then falling at a steeper slope to a floor of 0.
/// When the two thresholds coincide the knee has zero width and the score is
/// a hard cliff, which also keeps the interpolation divisor nonzero.
pub fn metric_score(value: f64, t: Thresholds) -> f64 {
    if value <= t.good {
        return 1.0;
    }

    let range = t.needs_improvement - t.good;
    if range <= 0.0 {
        return 0.0;
    }

    let score = if value <= t.needs_improvement {
        1.0 - ((value - t.good) / range) * 0.3
    } else {
        (0.7 - ((value - t.needs_improvement) / range) * 0.7).max(0.0)
    };

    debug_assert!(
        (0.0..=1.0).contains(&score),
        "metric score {score} out of range [0.0, 1.0]"
    );
    score
}

pub fn classify(average: f64) -> PerformanceStatus {
    if average >= 0.9 {
        PerformanceStatus::Good
    } else if average >= 0.7 {
        PerformanceStatus::NeedsImprovement
    } else {
        PerformanceStatus::Poor
    }
}

/// Validate a payload and score all five metrics.
///
/// All of lcp, fid, cls, fcp, tti, timestamp, and url must be present;
/// otherwise the error names every missing field and no partial scoring is
/// attempted.
pub fn score_payload(payload: &VitalsPayload) -> Result<VitalsReport, VitalsError> {
    let mut missing = Vec::new();
    let required: &[(&str, bool)] = &[
        ("lcp", payload.lcp.is_some()),
        ("fid", payload.fid.is_some()),
        ("cls", payload.cls.is_some()),
        ("fcp", payload.fcp.is_some()),
        ("tti", payload.tti.is_some()),
        ("timestamp", payload.timestamp.is_some()),
        ("url", payload.url.is_some()),
    ];
    for (name, present) in required {
        if !present {
            missing.push((*name).to_string());
        }
    }
    if !missing.is_empty() {
        return Err(VitalsError::MissingFields(missing));
    }

    // Presence of every field was just checked.
    let samples: [(&str, f64, Thresholds); 5] = [
        ("lcp", payload.lcp.unwrap_or_default(), thresholds::LCP),
        ("fid", payload.fid.unwrap_or_default(), thresholds::FID),
        ("cls", payload.cls.unwrap_or_default(), thresholds::CLS),
        ("fcp", payload.fcp.unwrap_or_default(), thresholds::FCP),
        ("tti", payload.tti.unwrap_or_default(), thresholds::TTI),
    ];

    let metrics: Vec<VitalsMetricResult> = samples
        .iter()
        .map(|(metric, raw_value, t)| VitalsMetricResult {
            metric: (*metric).to_string(),
            raw_value: *raw_value,
            score: metric_score(*raw_value, *t),
            thresholds: *t,
        })
        .collect();

    let overall_score = metrics.iter().map(|m| m.score).sum::<f64>() / metrics.len() as f64;

    Ok(VitalsReport {
        url: payload.url.clone().unwrap_or_default(),
        timestamp: payload
            .timestamp
            .clone()
            .unwrap_or(serde_json::Value::Null),
        metrics,
        overall_score,
        performance_status: classify(overall_score),
    })
}
