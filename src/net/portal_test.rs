use super::*;
use futures::executor::block_on;

fn instant_config() -> PortalConfig {
    PortalConfig {
        request_latency_ms: 0,
        recommendations_latency_ms: 0,
        allocation_latency_ms: 0,
        ..PortalConfig::default()
    }
}

fn service() -> MockPortalService {
    MockPortalService::from_config(&instant_config())
}

// =============================================================
// Candidate operations
// =============================================================

#[test]
fn recommendations_are_ranked_fixtures() {
    let recs = block_on(service().recommendations("CAND001")).unwrap();
    let scores: Vec<u8> = recs.iter().map(|rec| rec.match_score).collect();
    assert_eq!(scores, vec![92, 87, 78]);
    assert_eq!(recs[0].internship.company_name, "Tech Solutions India");
}

#[test]
fn blank_candidate_id_is_rejected() {
    let err = block_on(service().recommendations("   ")).unwrap_err();
    assert!(matches!(err, ServiceError::Rejected(_)));
    assert!(matches!(block_on(service().applications("")), Err(ServiceError::Rejected(_))));
}

#[test]
fn submit_application_builds_pending_application() {
    let app = block_on(service().submit_application(" CAND042 ", "INT002")).unwrap();
    assert_eq!(app.candidate_id, "CAND042");
    assert_eq!(app.internship_id, "INT002");
    assert_eq!(app.company_name, "Digital India Corp");
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.stipend, 22_000);
}

#[test]
fn submit_application_to_unknown_internship_is_not_found() {
    let err = block_on(service().submit_application("CAND001", "INT999")).unwrap_err();
    assert_eq!(err, ServiceError::NotFound("internship INT999".to_owned()));
}

#[test]
fn applications_carry_the_callers_candidate_id() {
    let apps = block_on(service().applications("CAND007")).unwrap();
    assert_eq!(apps.len(), 4);
    assert!(apps.iter().all(|app| app.candidate_id == "CAND007"));
}

#[test]
fn withdraw_accepts_pending_and_refuses_reviewed() {
    assert_eq!(block_on(service().withdraw_application("1")), Ok(()));
    assert!(matches!(block_on(service().withdraw_application("2")), Err(ServiceError::Rejected(_))));
    assert!(matches!(block_on(service().withdraw_application("99")), Err(ServiceError::NotFound(_))));
}

#[test]
fn allotment_follows_config_switch() {
    let found = block_on(service().allotment("CAND005")).unwrap().unwrap();
    assert_eq!(found.candidate_id, "CAND005");
    assert!(found.status.can_confirm());

    let none = MockPortalService::from_config(&PortalConfig { allotment_available: false, ..instant_config() });
    assert_eq!(block_on(none.allotment("CAND005")), Ok(None));
    assert!(matches!(block_on(none.confirm_allotment("1")), Err(ServiceError::NotFound(_))));
}

#[test]
fn confirm_allotment_requires_known_id() {
    assert_eq!(block_on(service().confirm_allotment(fixtures::ALLOTMENT_ID)), Ok(()));
    assert!(matches!(block_on(service().confirm_allotment("7")), Err(ServiceError::NotFound(_))));
}

// =============================================================
// Admin operations
// =============================================================

#[test]
fn run_allocation_returns_three_results() {
    let rows = block_on(service().run_allocation()).unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.candidate_name.as_str()).collect();
    assert_eq!(names, vec!["Rahul Sharma", "Priya Patel", "Amit Kumar"]);
}

#[test]
fn dashboard_stats_are_fixed() {
    let stats = block_on(service().dashboard_stats()).unwrap();
    assert_eq!(stats.total_candidates, 1247);
    assert_eq!(stats.total_applications, 3891);
    assert_eq!(stats.allocations_completed, 892);
    assert_eq!(stats.pending_allocations, 355);
}
