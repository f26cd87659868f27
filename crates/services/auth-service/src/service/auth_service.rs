//! Authentication service - login and session issuance.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::token::TokenIssuer;
use crate::repository::{SessionRepository, UserRepository};
use common::{AppError, AppResult};
use domain::{DomainError, LOGIN_SUCCESS_MESSAGE, TOKEN_TYPE_BEARER};

/// Login payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginInput {
    #[serde(rename = "cpf", default)]
    #[schema(example = "72430024985")]
    pub document: String,
    #[serde(rename = "senha", default)]
    #[schema(example = "Abc999")]
    pub password: String,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginOutput {
    #[schema(example = "login successful")]
    pub message: String,
    pub token: String,
    /// Token type (always "Bearer")
    #[serde(rename = "type")]
    #[schema(example = "Bearer")]
    pub token_type: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials, start a session and return its token
    async fn login(&self, input: LoginInput) -> AppResult<LoginOutput>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    tokens: TokenIssuer,
    session_duration: Duration,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        tokens: TokenIssuer,
        session_duration: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            tokens,
            session_duration,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, input: LoginInput) -> AppResult<LoginOutput> {
        let mut user = self
            .users
            .find_by_document(&input.document)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        // A corrupt stored hash is indistinguishable from a wrong password to the caller
        let password_ok = user.verify_password(&input.password).unwrap_or_else(|e| {
            tracing::warn!(user_id = %user.id(), error = %e, "Stored password hash is unusable");
            false
        });
        if !password_ok {
            return Err(AppError::InvalidCredentials);
        }

        let role = user.role();
        let session = user.start_session(Uuid::new_v4(), Utc::now(), self.session_duration)?;
        let token = self.tokens.issue(session, role)?;
        self.sessions.save(session).await?;

        tracing::info!(user_id = %session.user_id(), session_id = %session.id(), "Session started");

        Ok(LoginOutput {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockSessionRepository, MockUserRepository};
    use domain::{Password, Session, User};

    const SECRET: &[u8] = b"login-test-secret";

    fn stored_user(email: &str) -> User {
        User::builder("72430024985", "Jhon Doe", email, None)
            .password_hash(Password::new("Abc999").unwrap().into_string())
            .build()
            .unwrap()
    }

    fn authenticator(users: MockUserRepository, sessions: MockSessionRepository) -> Authenticator {
        Authenticator::new(
            Arc::new(users),
            Arc::new(sessions),
            TokenIssuer::new(SECRET),
            Duration::minutes(15),
        )
    }

    fn credentials(password: &str) -> LoginInput {
        LoginInput {
            document: "72430024985".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = stored_user("jhon@br.furabolso.com");
        let user_id = user.id();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_document()
            .returning(move |_| Ok(Some(user.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_save()
            .withf(move |s: &Session| s.user_id() == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let output =
            tokio_test::assert_ok!(authenticator(users, sessions).login(credentials("Abc999")).await);

        assert_eq!(output.message, "login successful");
        assert_eq!(output.token_type, "Bearer");

        let claims = TokenIssuer::new(SECRET).verify(&output.token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.user_type, "admin");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[tokio::test]
    async fn test_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_document().returning(|_| Ok(None));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_save().never();

        let result = authenticator(users, sessions).login(credentials("Abc999")).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let user = stored_user("jhon@doe.com");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_document()
            .returning(move |_| Ok(Some(user.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_save().never();

        let err = authenticator(users, sessions)
            .login(credentials("Abc998"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body().is_none());
    }

    #[tokio::test]
    async fn test_session_expiry_overflow_fails_cleanly() {
        let user = stored_user("jhon@doe.com");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_document()
            .returning(move |_| Ok(Some(user.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_save().never();
        let authenticator = Authenticator::new(
            Arc::new(users),
            Arc::new(sessions),
            TokenIssuer::new(SECRET),
            Duration::seconds(10_000_000_000_000),
        );

        let err = authenticator.login(credentials("Abc999")).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::SessionOutOfRange)
        ));
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_session_save_failure() {
        let user = stored_user("jhon@doe.com");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_document()
            .returning(move |_| Ok(Some(user.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_save()
            .returning(|_| Err(AppError::internal("disk full")));

        let result = authenticator(users, sessions).login(credentials("Abc999")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
