//! Session identity and the process-wide session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is what route guards, the header, and every page read to
//! decide who is signed in. It is produced only by `session_store`; views never
//! assemble one by hand.
//!
//! DESIGN
//! ======
//! `is_authenticated` is derived from the identity slot rather than stored, so
//! the two can never disagree. `Identity` keeps its fields private and validates
//! the candidate-id rule on construction and on cache decode.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Portal role attached to every identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Candidate,
    Admin,
}

impl Role {
    /// Lowercase wire name, matching the cached JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Admin => "admin",
        }
    }

    /// Capitalized label for buttons and the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Admin => "Admin",
        }
    }
}

/// Why an identity could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("candidate identity requires a candidate id")]
    MissingCandidateId,
    #[error("admin identity must not carry a candidate id")]
    UnexpectedCandidateId,
}

/// A cached identity blob that failed to parse or validate.
#[derive(Debug, thiserror::Error)]
#[error("cached identity is unreadable: {0}")]
pub struct CacheDecodeError(#[from] serde_json::Error);

/// The signed-in user's profile record.
///
/// `candidate_id` is present exactly when `role` is [`Role::Candidate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityRecord")]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_id: Option<String>,
}

impl Identity {
    /// Build an identity, normalizing the candidate id for the role.
    ///
    /// Admins drop any supplied candidate id; candidates require a non-blank one.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MissingCandidateId`] for a candidate without a
    /// usable candidate id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        candidate_id: Option<String>,
    ) -> Result<Self, IdentityError> {
        let candidate_id = match role {
            Role::Admin => None,
            Role::Candidate => {
                let trimmed = candidate_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .ok_or(IdentityError::MissingCandidateId)?;
                Some(trimmed.to_owned())
            }
        };
        Ok(Self { id: id.into(), name: name.into(), email: email.into(), role, candidate_id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn candidate_id(&self) -> Option<&str> {
        self.candidate_id.as_deref()
    }

    /// Decode the JSON blob written by [`Identity::to_cache_blob`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheDecodeError`] for malformed JSON or a blob that breaks the
    /// candidate-id rule.
    pub fn from_cache_blob(raw: &str) -> Result<Self, CacheDecodeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode for the identity cache.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for this plain record.
    pub fn to_cache_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Unvalidated wire shape used while decoding.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    id: String,
    name: String,
    email: String,
    role: Role,
    #[serde(default)]
    candidate_id: Option<String>,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = IdentityError;

    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        if record.role == Role::Admin && record.candidate_id.is_some() {
            return Err(IdentityError::UnexpectedCandidateId);
        }
        Self::new(record.id, record.name, record.email, record.role, record.candidate_id)
    }
}

/// Snapshot of who is signed in and whether a session transition is pending.
///
/// The default value is the startup state: no identity, loading until the
/// cache restore completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

impl SessionState {
    /// Settled, nobody signed in.
    pub fn signed_out() -> Self {
        Self { identity: None, loading: false }
    }

    /// Settled, `identity` signed in.
    pub fn signed_in(identity: Identity) -> Self {
        Self { identity: Some(identity), loading: false }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
