pub mod cache;
pub mod profiles;
pub mod synthesizer;

pub use cache::{CacheStats, Clock, InMemoryTrendCache, SystemClock, TrendCache};
pub use synthesizer::TrendSynthesizer;
