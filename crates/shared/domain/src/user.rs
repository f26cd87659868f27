//! User aggregate and its builder.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ADMIN_EMAIL_DOMAIN, MIN_EMAIL_LENGTH, MIN_NAME_LENGTH, ROLE_ADMIN, ROLE_DEFAULT};
use crate::cpf;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;
use crate::session::Session;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Default,
    Admin,
}

impl UserRole {
    /// Role implied by an email address.
    pub fn for_email(email: &str) -> Self {
        if email.contains(ADMIN_EMAIL_DOMAIN) {
            UserRole::Admin
        } else {
            UserRole::Default
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Default => ROLE_DEFAULT,
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_DEFAULT => Ok(UserRole::Default),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// Only constructible through [`UserBuilder`], so every value in circulation
/// has passed document, name, email and credential validation.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    role: UserRole,
    document: String,
    name: String,
    email: String,
    password: Password,
    birth_date: Option<NaiveDate>,
    active_session: Option<Session>,
}

impl User {
    /// Start building a user from its identity fields.
    pub fn builder(
        document: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> UserBuilder {
        UserBuilder {
            id: None,
            role: None,
            document: document.into(),
            name: name.into(),
            email: email.into(),
            birth_date,
            credential: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check a plaintext password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> DomainResult<bool> {
        self.password.verify(plain_text)
    }

    /// Attach a fresh session to this user and return it.
    pub fn start_session(
        &mut self,
        id: Uuid,
        now: DateTime<Utc>,
        duration: Duration,
    ) -> DomainResult<&Session> {
        let session = Session::new(id, self.id, now, duration)?;
        Ok(self.active_session.insert(session))
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.active_session.as_ref()
    }
}

enum Credential {
    Plain(String),
    Hashed(String),
}

/// Accumulates user fields; [`UserBuilder::build`] validates them in order
/// (document, name, email, credential) and stops at the first failure.
pub struct UserBuilder {
    id: Option<Uuid>,
    role: Option<UserRole>,
    document: String,
    name: String,
    email: String,
    birth_date: Option<NaiveDate>,
    credential: Option<Credential>,
}

impl UserBuilder {
    /// Use an existing id instead of generating one.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Override the role derived from the email.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Plaintext password, hashed during `build`.
    pub fn password(mut self, plain_text: impl Into<String>) -> Self {
        self.credential = Some(Credential::Plain(plain_text.into()));
        self
    }

    /// Already hashed password, e.g. loaded from storage.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.credential = Some(Credential::Hashed(hash.into()));
        self
    }

    pub fn build(self) -> DomainResult<User> {
        if !cpf::validate(&self.document) {
            return Err(DomainError::InvalidDocument);
        }
        if self.name.chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::InvalidName);
        }
        if self.email.chars().count() < MIN_EMAIL_LENGTH || !self.email.contains('@') {
            return Err(DomainError::InvalidEmail);
        }

        let password = match self.credential {
            Some(Credential::Plain(plain)) => Password::new(&plain)?,
            Some(Credential::Hashed(hash)) => Password::from_hash(hash)?,
            None => return Err(DomainError::InvalidPassword),
        };

        let role = self.role.unwrap_or_else(|| UserRole::for_email(&self.email));

        Ok(User {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            role,
            document: self.document,
            name: self.name,
            email: self.email,
            password,
            birth_date: self.birth_date,
            active_session: None,
        })
    }
}
