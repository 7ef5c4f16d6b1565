//! Sign-in capability and its mocked implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store depends only on [`AuthService`]. The mock accepts any
//! email/password pair and synthesizes an identity from the chosen role after
//! a configured latency; a real client can replace it without touching the
//! store or the route guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::state::session::{Identity, IdentityError, Role};
use crate::util::identity_cache::CacheError;
use crate::util::timer;

/// Fixed id handed out by the mocked login.
pub const MOCK_LOGIN_ID: &str = "1";
/// Placeholder candidate id for mocked candidate logins.
pub const MOCK_CANDIDATE_ID: &str = "CAND001";

/// Login form payload.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Registration form payload.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub candidate_id: Option<String>,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("candidate_id", &self.candidate_id)
            .finish()
    }
}

/// Failure of a login or register attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("identity could not be created: {0}")]
    Identity(#[from] IdentityError),
    #[error("session could not be saved: {0}")]
    Persist(#[from] CacheError),
    #[error("superseded by a newer sign-in attempt")]
    Superseded,
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

/// Remote sign-in boundary.
pub trait AuthService {
    fn login(&self, credentials: &LoginCredentials) -> impl Future<Output = Result<Identity, AuthError>>;

    fn register(&self, data: &RegisterData) -> impl Future<Output = Result<Identity, AuthError>>;
}

/// Accept-everything auth used until a real backend exists.
#[derive(Clone, Debug)]
pub struct MockAuthService {
    latency: Duration,
}

impl MockAuthService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl AuthService for MockAuthService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Identity, AuthError> {
        timer::sleep(self.latency).await;
        let (name, candidate_id) = match credentials.role {
            Role::Admin => ("Admin User", None),
            Role::Candidate => ("John Candidate", Some(MOCK_CANDIDATE_ID.to_owned())),
        };
        Ok(Identity::new(MOCK_LOGIN_ID, name, credentials.email.clone(), credentials.role, candidate_id)?)
    }

    async fn register(&self, data: &RegisterData) -> Result<Identity, AuthError> {
        timer::sleep(self.latency).await;
        let id = uuid::Uuid::new_v4().to_string();
        Ok(Identity::new(id, data.name.clone(), data.email.clone(), data.role, data.candidate_id.clone())?)
    }
}
