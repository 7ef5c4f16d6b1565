use super::*;

#[test]
fn login_form_trims_fields_but_not_password() {
    let credentials = login_form("  a@b.com ", " x ", Role::Admin).unwrap();
    assert_eq!(credentials.email, "a@b.com");
    assert_eq!(credentials.password, " x ");
    assert_eq!(credentials.role, Role::Admin);
}

#[test]
fn login_form_requires_email_then_password() {
    assert_eq!(login_form("", "x", Role::Candidate), Err(MissingField("Email")));
    assert_eq!(login_form("a@b.com", "   ", Role::Candidate), Err(MissingField("Password")));
}

#[test]
fn candidate_registration_requires_candidate_id() {
    let err = register_form("Jane", "j@x.com", "y", Role::Candidate, " ").unwrap_err();
    assert_eq!(err, MissingField("Candidate ID"));
    assert_eq!(err.to_string(), "Candidate ID is required");
}

#[test]
fn candidate_registration_keeps_trimmed_candidate_id() {
    let data = register_form(" Jane ", "j@x.com", "y", Role::Candidate, " CAND099 ").unwrap();
    assert_eq!(data.name, "Jane");
    assert_eq!(data.candidate_id.as_deref(), Some("CAND099"));
}

#[test]
fn admin_registration_ignores_candidate_id_input() {
    let data = register_form("Root", "r@x.com", "y", Role::Admin, "CAND123").unwrap();
    assert_eq!(data.role, Role::Admin);
    assert_eq!(data.candidate_id, None);
}

#[test]
fn registration_requires_name() {
    assert_eq!(register_form("", "j@x.com", "y", Role::Admin, ""), Err(MissingField("Full Name")));
}

#[test]
fn registration_keeps_password_whitespace() {
    let data = register_form("Jane", "j@x.com", "  pass phrase ", Role::Admin, "").unwrap();
    assert_eq!(data.password, "  pass phrase ");
    assert_eq!(register_form("Jane", "j@x.com", " \t", Role::Admin, ""), Err(MissingField("Password")));
}
