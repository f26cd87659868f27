//! User registration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::repository::UserRepository;
use common::AppResult;
use domain::{DomainError, User};

/// Registration payload. Field names follow the public API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserInput {
    #[serde(rename = "cpf", default)]
    #[schema(example = "72430024985")]
    pub document: String,
    #[serde(rename = "nome", default)]
    #[schema(example = "Jhon Doe")]
    pub name: String,
    #[serde(rename = "nascimento", default)]
    #[schema(value_type = Option<String>, format = Date, example = "1996-03-06")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(example = "jhon@doe.com")]
    pub email: String,
    #[serde(rename = "senha", default)]
    #[schema(example = "Abc999")]
    pub password: String,
}

/// Created user, echoing the input with `senha` replaced by the stored hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserOutput {
    pub id: Uuid,
    #[serde(rename = "cpf")]
    pub document: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nascimento")]
    #[schema(value_type = Option<String>, format = Date)]
    pub birth_date: Option<NaiveDate>,
    pub email: String,
    /// bcrypt hash of the submitted password
    #[serde(rename = "senha")]
    pub password_hash: String,
}

impl From<&User> for CreatedUserOutput {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            document: user.document().to_string(),
            name: user.name().to_string(),
            birth_date: user.birth_date(),
            email: user.email().to_string(),
            password_hash: user.password().as_str().to_string(),
        }
    }
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user unless the document or email is already taken
    async fn create_user(&self, input: CreateUserInput) -> AppResult<CreatedUserOutput>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    id_generator: fn() -> Uuid,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self::with_id_generator(users, Uuid::new_v4)
    }

    /// Use a custom id source (deterministic ids in tests).
    pub fn with_id_generator(users: Arc<dyn UserRepository>, id_generator: fn() -> Uuid) -> Self {
        Self { users, id_generator }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUserInput) -> AppResult<CreatedUserOutput> {
        if self.users.find_by_document(&input.document).await?.is_some() {
            return Err(DomainError::UserAlreadyExists.into());
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::UserAlreadyExists.into());
        }

        let user = User::builder(input.document, input.name, input.email, input.birth_date)
            .id((self.id_generator)())
            .password(input.password)
            .build()?;

        // A concurrent insert that slipped past the checks fails on the unique index
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id(), role = %user.role(), "User created");
        Ok(CreatedUserOutput::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;
    use mockall::predicate::eq;

    const FIXED_ID: Uuid = Uuid::from_u128(0x1234);

    fn fixed_id() -> Uuid {
        FIXED_ID
    }

    fn input() -> CreateUserInput {
        CreateUserInput {
            document: "72430024985".to_string(),
            name: "Jhon Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 3, 6),
            email: "jhon@doe.com".to_string(),
            password: "Abc999".to_string(),
        }
    }

    fn existing_user() -> User {
        User::builder("72430024985", "Jhon Doe", "jhon@doe.com", None)
            .password_hash(domain::Password::new("Abc999").unwrap().into_string())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document()
            .with(eq("72430024985"))
            .returning(|_| Ok(None));
        repo.expect_find_by_email()
            .with(eq("jhon@doe.com"))
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user: &User| user.id() == FIXED_ID && user.document() == "72430024985")
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::with_id_generator(Arc::new(repo), fixed_id);
        let output = service.create_user(input()).await.unwrap();

        assert_eq!(output.id, FIXED_ID);
        assert_eq!(output.document, "72430024985");
        assert_eq!(output.birth_date, NaiveDate::from_ymd_opt(1996, 3, 6));
        assert_ne!(output.password_hash, "Abc999");
        assert!(bcrypt_matches(&output.password_hash, "Abc999"));
    }

    #[tokio::test]
    async fn test_existing_document() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document()
            .returning(|_| Ok(Some(existing_user())));
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input()).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_existing_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document().returning(|_| Ok(None));
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input()).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document()
            .returning(|_| Err(AppError::internal("connection reset")));
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_invalid_document_never_written() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(CreateUserInput {
                document: "93847575438".to_string(),
                ..input()
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidDocument))
        ));
    }

    #[tokio::test]
    async fn test_create_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_document().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(DomainError::UserAlreadyExists.into()));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input()).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserAlreadyExists))
        ));
    }

    fn bcrypt_matches(hash: &str, plain: &str) -> bool {
        domain::Password::from_hash(hash)
            .and_then(|p| p.verify(plain))
            .unwrap_or(false)
    }
}
