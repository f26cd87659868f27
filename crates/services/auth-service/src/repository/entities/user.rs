//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainError, User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub document: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub birthdate: Option<Date>,
    #[sea_orm(column_name = "type")]
    pub user_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Rebuild the aggregate; rows that no longer validate are rejected.
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        User::builder(model.document, model.name, model.email, model.birthdate)
            .id(model.id)
            .role(UserRole::try_from(model.user_type.as_str())?)
            .password_hash(model.password)
            .build()
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id()),
            document: Set(user.document().to_string()),
            name: Set(user.name().to_string()),
            email: Set(user.email().to_string()),
            password: Set(user.password().as_str().to_string()),
            birthdate: Set(user.birth_date()),
            user_type: Set(user.role().to_string()),
        }
    }
}
