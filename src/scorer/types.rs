use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct_count: usize,
    pub wrong_count: usize,
    // Percentage, rounded half-up to two decimals
    pub accuracy: f64,
    pub verdict: Verdict,
}
