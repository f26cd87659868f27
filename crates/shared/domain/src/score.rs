//! Credit score derived from a customer's debts.

use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MEAN_OFFSET, SCORE_NUMERATOR};

/// `10000 / sqrt(mean + 100)`; an empty slice uses a mean of zero.
pub fn calculate_score(amounts: &[f64]) -> f64 {
    let mean = if amounts.is_empty() {
        0.0
    } else {
        amounts.iter().sum::<f64>() / amounts.len() as f64
    };

    SCORE_NUMERATOR / (mean + SCORE_MEAN_OFFSET).sqrt()
}

/// Integer credit score as exposed over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct Score(i64);

impl Score {
    /// Score for the given debt amounts, truncated toward zero.
    pub fn from_amounts(amounts: &[f64]) -> Self {
        Score(calculate_score(amounts) as i64)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        score.0
    }
}
