use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Case-sensitive user-agent marker for the primary crawler.
pub const PRIMARY_MARKER: &str = "Googlebot";

/// Generic crawler markers, matched against the lowercased line. Only the
/// primary marker's casing is significant; third-party UA strings vary.
const GENERIC_MARKERS: &[&str] = &["bot", "crawler"];

/// Path segments that represent wasted crawl budget.
const WASTE_SEGMENTS: &[&str] = &["/admin/", "/api/", "/private/"];

const SLOW_MEAN_MS: f64 = 2000.0;
const OVER_CRAWL_VISITS: u64 = 10;

static METHOD_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:GET|POST|PUT|DELETE|HEAD|PATCH)\s+(\S+)").expect("valid method/path pattern")
});
static STATUS_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s([1-5]\d{2})\s").expect("valid status pattern"));
static RESPONSE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*$").expect("valid response-time pattern"));

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to read crawl log: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Waste,
    Performance,
    Errors,
    Frequency,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

/// Tallies from one pass over a crawl log, plus the derived recommendations
/// and optimization score. Built once per invocation and then frozen.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlStats {
    pub total_requests: u64,
    pub googlebot_requests: u64,
    pub other_bot_requests: u64,
    pub url_visit_counts: BTreeMap<String, u64>,
    pub status_code_counts: BTreeMap<u16, u64>,
    /// Response times in milliseconds, in log order.
    pub response_times: Vec<u64>,
    pub waste_count: u64,
    pub recommendations: Vec<Recommendation>,
    /// Crawl-budget optimization score in [0, 100].
    pub optimization_score: f64,
}

impl CrawlStats {
    pub fn mean_response_time(&self) -> f64 {
        if self.response_times.is_empty() {
            return 0.0;
        }
        self.response_times.iter().sum::<u64>() as f64 / self.response_times.len() as f64
    }

    /// Distinct 4xx/5xx status codes seen.
    pub fn distinct_error_codes(&self) -> usize {
        self.status_code_counts
            .keys()
            .filter(|code| **code >= 400)
            .count()
    }
}

pub(crate) fn is_waste_path(path: &str) -> bool {
    WASTE_SEGMENTS.iter().any(|segment| path.contains(segment))
}

/// Analyze a crawl log in a single pass over its lines.
///
/// Every non-empty line counts toward `total_requests`. Lines carrying the
/// primary marker are parsed for path, status, and response time; other
/// lines only contribute to the generic-bot tally.
pub fn analyze(log_text: &str) -> CrawlStats {
    let mut stats = CrawlStats::default();

    for line in log_text.lines().filter(|l| !l.trim().is_empty()) {
        stats.total_requests += 1;

        if line.contains(PRIMARY_MARKER) {
            stats.googlebot_requests += 1;

            if let Some(caps) = METHOD_PATH.captures(line) {
                let path = &caps[1];
                *stats.url_visit_counts.entry(path.to_string()).or_insert(0) += 1;
                if is_waste_path(path) {
                    stats.waste_count += 1;
                }
            }

            if let Some(caps) = STATUS_CODE.captures(line) {
                if let Ok(code) = caps[1].parse::<u16>() {
                    *stats.status_code_counts.entry(code).or_insert(0) += 1;
                }
            }

            if let Some(caps) = RESPONSE_TIME.captures(line) {
                if let Ok(ms) = caps[1].parse::<u64>() {
                    stats.response_times.push(ms);
                }
            }
        } else {
            let lower = line.to_lowercase();
            if GENERIC_MARKERS.iter().any(|m| lower.contains(m)) {
                stats.other_bot_requests += 1;
            }
        }
    }

    stats.recommendations = derive_recommendations(&stats);
    stats.optimization_score = optimization_score(&stats);

    log::debug!(
        "crawl log analyzed: {} lines, {} googlebot, {} waste, score {:.1}",
        stats.total_requests,
        stats.googlebot_requests,
        stats.waste_count,
        stats.optimization_score
    );

    stats
}

/// Read a log file and analyze it. An unreadable log is surfaced as an I/O
/// error; no partial stats are fabricated.
pub fn analyze_file(path: &Path) -> Result<CrawlStats, CrawlError> {
    let text = std::fs::read_to_string(path)?;
    Ok(analyze(&text))
}

fn derive_recommendations(stats: &CrawlStats) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if stats.waste_count > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Waste,
            priority: Priority::High,
            message: format!(
                "{} crawler requests hit non-public paths (admin, api, private)",
                stats.waste_count
            ),
            action: "Add Disallow rules for these paths to robots.txt".to_string(),
        });
    }

    let mean = stats.mean_response_time();
    if mean > SLOW_MEAN_MS {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Performance,
            priority: Priority::High,
            message: format!("Mean crawler response time is {mean:.0}ms"),
            action: "Enable caching or improve server performance for crawled pages".to_string(),
        });
    }

    if stats.distinct_error_codes() > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Errors,
            priority: Priority::High,
            message: "Crawler encountered 4xx/5xx responses".to_string(),
            action: "Fix or redirect the broken URLs the crawler is hitting".to_string(),
        });
    }

    let over_crawled = stats
        .url_visit_counts
        .values()
        .any(|count| *count > OVER_CRAWL_VISITS);
    if over_crawled {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Frequency,
            priority: Priority::Medium,
            message: format!("Some URLs were crawled more than {OVER_CRAWL_VISITS} times"),
            action: "Review sitemap priorities and crawl frequency hints".to_string(),
        });
    }

    recommendations
}

fn optimization_score(stats: &CrawlStats) -> f64 {
    let mut score = 100.0;

    score -= (stats.waste_count as f64 * 2.0).min(20.0);

    let mean = stats.mean_response_time();
    if mean > SLOW_MEAN_MS {
        score -= ((mean - SLOW_MEAN_MS) / 100.0).min(15.0);
    }

    score -= 5.0 * stats.distinct_error_codes() as f64;

    score.clamp(0.0, 100.0)
}
