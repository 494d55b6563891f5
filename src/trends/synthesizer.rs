use std::thread;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use crate::trends::cache::{CacheStats, Clock, InMemoryTrendCache, SystemClock, TrendCache};
use crate::trends::profiles::{self, SuggestionTemplate};
use crate::types::{RelatedQuery, RelatedTopic, Timeframe, TrendKey, TrendRecord};

/// Failure of the simulated upstream trend provider. Recovered internally by
/// the mock fallback; never surfaced to callers.
#[derive(Debug, Error)]
enum FetchError {
    #[error("simulated trend provider unavailable")]
    Unavailable,
}

/// Synthesizes trend data for keywords, caching results per
/// (keyword, timeframe) for one hour.
///
/// Generic over its cache, clock, and random source so tests can inject a
/// fixed clock and a seeded rng; [`TrendSynthesizer::new`] wires the live
/// defaults. Methods take `&mut self`: the synthesizer owns the only mutable
/// state in the crate, and a multi-threaded host must wrap it in a `Mutex`.
pub struct TrendSynthesizer<K, C, R> {
    cache: K,
    clock: C,
    rng: R,
    latency: Option<Duration>,
    failure_rate: f64,
}

impl TrendSynthesizer<InMemoryTrendCache, SystemClock, ThreadRng> {
    pub fn new() -> Self {
        TrendSynthesizer {
            cache: InMemoryTrendCache::new(),
            clock: SystemClock,
            rng: rand::thread_rng(),
            latency: Some(Duration::from_millis(120)),
            failure_rate: 0.0,
        }
    }
}

impl Default for TrendSynthesizer<InMemoryTrendCache, SystemClock, ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, R> TrendSynthesizer<K, C, R>
where
    K: TrendCache,
    C: Clock,
    R: Rng,
{
    pub fn with_parts(cache: K, clock: C, rng: R) -> Self {
        TrendSynthesizer {
            cache,
            clock,
            rng,
            latency: None,
            failure_rate: 0.0,
        }
    }

    /// Bounded artificial delay before each cache miss, mimicking the
    /// upstream round trip. `None` disables it.
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency;
        self
    }

    /// Probability in [0, 1] that a simulated fetch fails, exercising the
    /// mock fallback path.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Trend records for the given keywords, sorted descending by trend
    /// strength. Cache hits are served as-is while fresher than the TTL.
    pub fn trending_data(&mut self, keywords: &[&str], timeframe: &Timeframe) -> Vec<TrendRecord> {
        let mut records = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let key = TrendKey::new(keyword, timeframe);
            let now = self.clock.now();
            if let Some(hit) = self.cache.get(&key, now) {
                records.push(hit);
                continue;
            }

            if let Some(delay) = self.latency {
                thread::sleep(delay);
            }

            let record = match self.fetch(keyword, timeframe) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("trend fetch failed for {keyword:?}: {err}; serving mock data");
                    self.mock_record(keyword, timeframe)
                }
            };

            self.cache.put(key, record.clone(), now);
            records.push(record);
        }

        records.sort_by(|a, b| b.trend.cmp(&a.trend));
        records
    }

    /// Trend records for a fixed category's keyword list, sorted descending
    /// by trend and truncated to `limit`. Unknown categories resolve to the
    /// default list.
    pub fn trending_by_category(&mut self, category: &str, limit: usize) -> Vec<TrendRecord> {
        let keywords = profiles::category_keywords(category);
        let mut records = self.trending_data(keywords, &Timeframe::default());
        records.truncate(limit);
        records
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn fetch(&mut self, keyword: &str, timeframe: &Timeframe) -> Result<TrendRecord, FetchError> {
        if self.failure_rate > 0.0 && self.rng.gen::<f64>() < self.failure_rate {
            return Err(FetchError::Unavailable);
        }

        let profile = profiles::profile_for(keyword);

        let trend_jitter: i32 = self.rng.gen_range(-15..=15);
        let volume_jitter: i64 = self.rng.gen_range(-2500..=2500);

        let trend = (profile.base_trend as i32 + trend_jitter).clamp(0, 100) as u32;
        let search_volume = (profile.base_volume as i64 + volume_jitter).max(1000) as u64;

        let suggestions = profiles::suggestions_for(keyword);
        let related_queries = self.related_queries(keyword, suggestions.queries);
        let related_topics = self.related_topics(suggestions.topics);

        Ok(TrendRecord {
            keyword: keyword.to_string(),
            trend,
            search_volume,
            related_queries,
            related_topics,
            timeframe: timeframe.clone(),
            last_updated: self.clock.now(),
        })
    }

    /// Degraded-mode record: same shape as a fetched one, values drawn
    /// purely at random with no segment classification.
    pub fn mock_record(&mut self, keyword: &str, timeframe: &Timeframe) -> TrendRecord {
        let trend = self.rng.gen_range(0..=100);
        let search_volume = self.rng.gen_range(1000..=50_000);

        let fallback = &profiles::DEFAULT_SUGGESTIONS;
        let related_queries = self.related_queries(keyword, fallback.queries);
        let related_topics = self.related_topics(fallback.topics);

        TrendRecord {
            keyword: keyword.to_string(),
            trend,
            search_volume,
            related_queries,
            related_topics,
            timeframe: timeframe.clone(),
            last_updated: self.clock.now(),
        }
    }

    fn related_queries(
        &mut self,
        keyword: &str,
        templates: &[SuggestionTemplate],
    ) -> Vec<RelatedQuery> {
        let mut queries: Vec<RelatedQuery> = templates
            .iter()
            .map(|t| RelatedQuery {
                query: t.pattern.replace("{}", keyword),
                value: self.rng.gen_range(t.min_value..=t.max_value),
            })
            .collect();
        queries.sort_by(|a, b| b.value.cmp(&a.value));
        queries
    }

    fn related_topics(&mut self, templates: &[SuggestionTemplate]) -> Vec<RelatedTopic> {
        let mut topics: Vec<RelatedTopic> = templates
            .iter()
            .map(|t| RelatedTopic {
                topic: t.pattern.to_string(),
                value: self.rng.gen_range(t.min_value..=t.max_value),
            })
            .collect();
        topics.sort_by(|a, b| b.value.cmp(&a.value));
        topics
    }
}
