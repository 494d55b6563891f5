use serde::{Deserialize, Serialize};

/// The (good, needs-improvement) boundaries for one metric.
///
/// Values at or below `good` score 1.0; the band up to `needs_improvement`
/// degrades linearly to 0.7; beyond it the score falls toward 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub good: f64,
    pub needs_improvement: f64,
}

impl Thresholds {
    pub const fn new(good: f64, needs_improvement: f64) -> Self {
        Thresholds {
            good,
            needs_improvement,
        }
    }
}

// Standard Core Web Vitals boundaries. LCP/FID/FCP/TTI in milliseconds,
// CLS unitless.
pub const LCP: Thresholds = Thresholds::new(2500.0, 4000.0);
pub const FID: Thresholds = Thresholds::new(100.0, 300.0);
pub const CLS: Thresholds = Thresholds::new(0.1, 0.25);
pub const FCP: Thresholds = Thresholds::new(1800.0, 3000.0);
pub const TTI: Thresholds = Thresholds::new(3800.0, 7300.0);
