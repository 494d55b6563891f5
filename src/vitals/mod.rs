pub mod scorer;
pub mod thresholds;

pub use scorer::{
    classify, metric_score, score_payload, PerformanceStatus, VitalsError, VitalsMetricResult,
    VitalsPayload, VitalsReport,
};
pub use thresholds::Thresholds;
