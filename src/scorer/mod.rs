pub mod engine;
pub mod types;

pub use self::engine::{accuracy_percent, aggregate, compare};
pub use self::types::{ScoreSummary, Verdict};
