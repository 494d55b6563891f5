pub mod identifiers;
pub mod records;

pub use identifiers::{Timeframe, TrendKey};
pub use records::{KeywordRecord, RelatedQuery, RelatedTopic, TrendRecord};
