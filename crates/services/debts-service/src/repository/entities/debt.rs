//! Debt database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Debt, DomainError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub document: String,
    pub amount: f64,
    pub due_date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Debt {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Debt::new(
            model.id,
            model.document,
            model.amount,
            model.due_date,
            model.created_at,
        )
    }
}

impl From<&Debt> for ActiveModel {
    fn from(debt: &Debt) -> Self {
        ActiveModel {
            id: Set(debt.id()),
            document: Set(debt.document().to_string()),
            amount: Set(debt.amount()),
            due_date: Set(debt.due_date()),
            created_at: Set(debt.created_at()),
        }
    }
}
