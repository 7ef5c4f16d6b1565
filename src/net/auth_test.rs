use super::*;
use futures::executor::block_on;
use std::time::Duration;

fn service() -> MockAuthService {
    MockAuthService::new(Duration::ZERO)
}

fn login_as(role: Role) -> LoginCredentials {
    LoginCredentials { email: "a@b.com".to_owned(), password: "x".to_owned(), role }
}

#[test]
fn mock_login_admin_synthesizes_admin_user() {
    let identity = block_on(service().login(&login_as(Role::Admin))).unwrap();
    assert_eq!(identity.id(), MOCK_LOGIN_ID);
    assert_eq!(identity.name(), "Admin User");
    assert_eq!(identity.email(), "a@b.com");
    assert_eq!(identity.role(), Role::Admin);
    assert_eq!(identity.candidate_id(), None);
}

#[test]
fn mock_login_candidate_gets_placeholder_candidate_id() {
    let identity = block_on(service().login(&login_as(Role::Candidate))).unwrap();
    assert_eq!(identity.name(), "John Candidate");
    assert_eq!(identity.candidate_id(), Some(MOCK_CANDIDATE_ID));
}

#[test]
fn mock_register_uses_caller_fields_and_fresh_ids() {
    let data = RegisterData {
        name: "Jane".to_owned(),
        email: "j@x.com".to_owned(),
        password: "y".to_owned(),
        role: Role::Candidate,
        candidate_id: Some("CAND099".to_owned()),
    };
    let first = block_on(service().register(&data)).unwrap();
    let second = block_on(service().register(&data)).unwrap();
    assert_eq!(first.name(), "Jane");
    assert_eq!(first.candidate_id(), Some("CAND099"));
    assert_ne!(first.id(), second.id());
    assert!(uuid::Uuid::parse_str(first.id()).is_ok());
}

#[test]
fn mock_register_candidate_without_id_fails() {
    let data = RegisterData {
        name: "Jane".to_owned(),
        email: "j@x.com".to_owned(),
        password: "y".to_owned(),
        role: Role::Candidate,
        candidate_id: None,
    };
    let err = block_on(service().register(&data)).unwrap_err();
    assert_eq!(err, AuthError::Identity(IdentityError::MissingCandidateId));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", LoginCredentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned(), role: Role::Admin });
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}
