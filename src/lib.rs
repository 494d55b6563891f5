//! Scoring and normalization core for SEO and page-performance tooling.
//!
//! `seo-core` provides keyword difficulty and opportunity scoring, simulated
//! trend synthesis behind a TTL cache, Core Web Vitals scoring, and crawl-log
//! analysis. Every scorer is a pure, synchronous function over in-memory
//! data; the only mutable state in the crate is the injected trend cache.
//!
//! The HTTP routes that serve these results live outside this crate; it only
//! defines the computations and the serializable payload shapes.

pub mod crawl;
pub mod keyword;
pub mod trends;
pub mod types;
pub mod vitals;
