//! Session repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

use super::entities::session::ActiveModel;
use common::AppResult;
use domain::Session;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a freshly started session
    async fn save(&self, session: &Session) -> AppResult<()>;
}

/// SeaORM-backed session repository
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn save(&self, session: &Session) -> AppResult<()> {
        ActiveModel::from(session).insert(&self.db).await?;
        Ok(())
    }
}
