//! Credit score calculation over the debts service.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::client::DebtsClient;
use common::AppResult;
use domain::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreOutput {
    #[schema(value_type = i64, example = 707)]
    pub score: Score,
}

/// Score service trait for dependency injection.
#[async_trait]
pub trait ScoreService: Send + Sync {
    async fn calculate_score(&self, document: &str) -> AppResult<ScoreOutput>;
}

/// Concrete implementation of ScoreService.
pub struct ScoreCalculator {
    debts: Arc<dyn DebtsClient>,
}

impl ScoreCalculator {
    pub fn new(debts: Arc<dyn DebtsClient>) -> Self {
        Self { debts }
    }
}

#[async_trait]
impl ScoreService for ScoreCalculator {
    async fn calculate_score(&self, document: &str) -> AppResult<ScoreOutput> {
        let debts = self.debts.get_debts_by_document(document).await?;
        let amounts: Vec<f64> = debts.iter().map(|d| d.amount).collect();

        let score = Score::from_amounts(&amounts);
        tracing::debug!(debts = amounts.len(), score = score.value(), "Score calculated");

        Ok(ScoreOutput { score })
    }
}
