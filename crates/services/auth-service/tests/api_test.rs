//! Integration tests for the auth HTTP API.
//!
//! The real router and services run against in-memory repositories, so no
//! database is required.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use tower::ServiceExt;

use auth_service_lib::create_router;
use auth_service_lib::repository::{SessionRepository, UserRepository};
use auth_service_lib::service::{Authenticator, TokenIssuer, UserManager};
use auth_service_lib::state::AppState;
use common::{AppError, AppResult, HealthProbe};
use domain::{DomainError, Password, Session, User};

const SECRET: &[u8] = b"api-test-secret";

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    fail_create: bool,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_document(&self, document: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.document() == document).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        if self.fail_create {
            return Err(AppError::internal("insert failed"));
        }
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.document() == user.document() || u.email() == user.email())
        {
            return Err(DomainError::UserAlreadyExists.into());
        }
        users.push(user.clone());
        Ok(())
    }
}

#[derive(Default)]
struct InMemorySessions {
    sessions: Mutex<Vec<Session>>,
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn save(&self, session: &Session) -> AppResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct TestApp {
    router: Router,
    sessions: Arc<InMemorySessions>,
}

fn app_with(users: InMemoryUsers) -> TestApp {
    let users = Arc::new(users);
    let sessions = Arc::new(InMemorySessions::default());

    let user_service = Arc::new(UserManager::new(users.clone()));
    let auth_service = Arc::new(Authenticator::new(
        users,
        sessions.clone(),
        TokenIssuer::new(SECRET),
        Duration::minutes(10),
    ));
    let probes: Vec<Arc<dyn HealthProbe>> = Vec::new();

    TestApp {
        router: create_router(AppState::new(user_service, auth_service, probes)),
        sessions,
    }
}

fn app() -> TestApp {
    app_with(InMemoryUsers::default())
}

async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

const JHON: &str = r#"{"cpf":"72430024985","nome":"Jhon Doe","nascimento":"1996-03-06","email":"jhon@doe.com","senha":"Abc999"}"#;

// =============================================================================
// Create user
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_hashed_password() {
    let app = app();

    let (status, bytes) = post_json(&app.router, "/auth/users", JHON).await;

    assert_eq!(status, StatusCode::CREATED);
    let body = json(&bytes);
    assert_eq!(body["cpf"], "72430024985");
    assert_eq!(body["nome"], "Jhon Doe");
    assert_eq!(body["nascimento"], "1996-03-06");
    assert_eq!(body["email"], "jhon@doe.com");

    let hash = body["senha"].as_str().unwrap();
    assert_ne!(hash, "Abc999");
    assert!(Password::from_hash(hash).unwrap().verify("Abc999").unwrap());
}

#[tokio::test]
async fn test_create_user_empty_payload() {
    let app = app();

    let (status, bytes) = post_json(&app.router, "/auth/users", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&bytes),
        serde_json::json!({
            "message": "invalid parameters on request body",
            "errors": [
                "invalid cpf",
                "name must be at least 3 characters",
                "invalid email address",
                "password must contains at least one lower case character",
                "password must contains at least one upper case character",
                "password must contains at least one numeric character",
                "password must contains at least 6 or up to 12 characters"
            ]
        })
    );
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let app = app();

    let (status, bytes) = post_json(&app.router, "/auth/users", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&bytes)["message"], "error parsing request body");
}

#[tokio::test]
async fn test_create_user_twice() {
    let app = app();
    post_json(&app.router, "/auth/users", JHON).await;

    let (status, bytes) = post_json(&app.router, "/auth/users", JHON).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&bytes),
        serde_json::json!({"message": "error creating user", "errors": ["user already exists"]})
    );
}

#[tokio::test]
async fn test_create_user_storage_failure() {
    let app = app_with(InMemoryUsers {
        fail_create: true,
        ..Default::default()
    });

    let (status, bytes) = post_json(&app.router, "/auth/users", JHON).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_admin_domain_user() {
    let app = app();
    let payload = r#"{"cpf":"17185070031","nome":"Ana Admin","email":"ana@br.furabolso.com","senha":"Abc999"}"#;
    post_json(&app.router, "/auth/users", payload).await;

    let (status, bytes) = post_json(
        &app.router,
        "/auth/users/login",
        r#"{"cpf":"17185070031","senha":"Abc999"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let token = json(&bytes)["token"].as_str().unwrap().to_string();
    let claims = TokenIssuer::new(SECRET).verify(&token).unwrap();
    assert_eq!(claims.user_type, "admin");
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_issues_session_token() {
    let app = app();
    post_json(&app.router, "/auth/users", JHON).await;

    let (status, bytes) = post_json(
        &app.router,
        "/auth/users/login",
        r#"{"cpf":"72430024985","senha":"Abc999"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = json(&bytes);
    assert_eq!(body["message"], "login successful");
    assert_eq!(body["type"], "Bearer");

    let claims = TokenIssuer::new(SECRET)
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user_type, "default");

    let sessions = app.sessions.sessions.lock().unwrap();
    assert_eq!(sessions.len(), 1);
    let session = &sessions[0];
    assert_eq!(claims.id, session.id());
    assert_eq!(claims.exp, session.expires_at().timestamp());
    assert_eq!(session.expires_at(), session.created_at() + Duration::minutes(10));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = app();

    let (status, bytes) = post_json(
        &app.router,
        "/auth/users/login",
        r#"{"cpf":"72430024985","senha":"Abc999"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&bytes), serde_json::json!({"message": "user not found"}));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = app();
    post_json(&app.router, "/auth/users", JHON).await;

    let (status, bytes) = post_json(
        &app.router,
        "/auth/users/login",
        r#"{"cpf":"72430024985","senha":"Wrong1"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(bytes.is_empty());
    assert!(app.sessions.sessions.lock().unwrap().is_empty());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_without_probes() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
