//! Debt recording and lookup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::repository::DebtRepository;
use common::AppResult;
use domain::Debt;

/// New debt payload. Field names follow the public API.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDebtInput {
    #[serde(rename = "cpf", default)]
    #[schema(example = "17185070031")]
    pub document: String,
    #[serde(rename = "valor", default)]
    #[schema(example = 1500.75)]
    pub amount: f64,
    #[serde(rename = "vencimento")]
    #[schema(value_type = String, format = Date, example = "2025-01-10")]
    pub due_date: NaiveDate,
}

/// Created debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDebtOutput {
    pub id: Uuid,
    #[serde(rename = "cpf")]
    pub document: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "vencimento")]
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
}

/// One entry of a debt listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtOutput {
    pub id: Uuid,
    #[serde(rename = "cpf")]
    pub document: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "vencimento")]
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

impl From<&Debt> for DebtOutput {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id(),
            document: debt.document().to_string(),
            amount: debt.amount(),
            due_date: debt.due_date(),
            created_at: debt.created_at(),
        }
    }
}

/// Debt service trait for dependency injection.
#[async_trait]
pub trait DebtService: Send + Sync {
    /// Validate and persist a new debt
    async fn create_debt(&self, input: CreateDebtInput) -> AppResult<CreateDebtOutput>;

    /// All debts recorded for a document
    async fn get_debts(&self, document: &str) -> AppResult<Vec<DebtOutput>>;
}

/// Concrete implementation of DebtService.
pub struct DebtManager {
    debts: Arc<dyn DebtRepository>,
}

impl DebtManager {
    pub fn new(debts: Arc<dyn DebtRepository>) -> Self {
        Self { debts }
    }
}

#[async_trait]
impl DebtService for DebtManager {
    async fn create_debt(&self, input: CreateDebtInput) -> AppResult<CreateDebtOutput> {
        let debt = Debt::new(
            Uuid::new_v4(),
            input.document,
            input.amount,
            input.due_date,
            Utc::now(),
        )?;

        self.debts.save(&debt).await?;
        tracing::info!(debt_id = %debt.id(), "Debt created");

        Ok(CreateDebtOutput {
            id: debt.id(),
            document: debt.document().to_string(),
            amount: debt.amount(),
            due_date: debt.due_date(),
        })
    }

    async fn get_debts(&self, document: &str) -> AppResult<Vec<DebtOutput>> {
        let debts = self.debts.find_all(document).await?;
        Ok(debts.iter().map(DebtOutput::from).collect())
    }
}
