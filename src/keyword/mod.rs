pub mod difficulty;
pub mod opportunity;

pub use difficulty::difficulty;
pub use opportunity::{opportunity, score_keyword};
