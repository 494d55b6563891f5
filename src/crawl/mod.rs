pub mod analyzer;
pub mod report;

pub use analyzer::{
    analyze, analyze_file, CrawlError, CrawlStats, Priority, Recommendation, RecommendationKind,
    PRIMARY_MARKER,
};
pub use report::{markdown_report, optimized_robots_txt};
