//! Debt repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::debt::{self, ActiveModel, Entity as DebtEntity};
use common::{AppError, AppResult};
use domain::Debt;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Debt repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DebtRepository: Send + Sync {
    /// All debts of a document, earliest due date first
    async fn find_all(&self, document: &str) -> AppResult<Vec<Debt>>;

    async fn save(&self, debt: &Debt) -> AppResult<()>;
}

/// SeaORM-backed debt repository
pub struct DebtStore {
    db: DatabaseConnection,
}

impl DebtStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DebtRepository for DebtStore {
    async fn find_all(&self, document: &str) -> AppResult<Vec<Debt>> {
        let models = DebtEntity::find()
            .filter(debt::Column::Document.eq(document))
            .order_by_asc(debt::Column::DueDate)
            .order_by_asc(debt::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models
            .into_iter()
            .map(|model| {
                let id = model.id;
                Debt::try_from(model)
                    .map_err(|e| AppError::internal(format!("stored debt {id} is invalid: {e}")))
            })
            .collect()
    }

    async fn save(&self, debt: &Debt) -> AppResult<()> {
        ActiveModel::from(debt).insert(&self.db).await?;
        tracing::debug!(debt_id = %debt.id(), "Debt inserted");
        Ok(())
    }
}
