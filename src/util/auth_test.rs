use std::cell::RefCell;

use super::*;
use crate::state::session::{Identity, Role};

fn candidate() -> SessionState {
    SessionState::signed_in(Identity::new("1", "Asha", "asha@x.com", Role::Candidate, Some("CAND001".to_owned())).unwrap())
}

#[test]
fn logout_on_guarded_page_flips_decision_to_login() {
    let session = RwSignal::new(candidate());
    let path = RwSignal::new("/applications".to_owned());
    let decision = route_decision(session, Memo::new(move |_| path.get()));
    assert_eq!(decision.get(), GuardDecision::Render);

    session.set(SessionState::signed_out());
    assert_eq!(decision.get(), GuardDecision::Redirect("/login"));
}

#[test]
fn path_change_is_reevaluated_for_same_session() {
    let session = RwSignal::new(candidate());
    let path = RwSignal::new("/dashboard".to_owned());
    let decision = route_decision(session, Memo::new(move |_| path.get()));
    assert_eq!(decision.get(), GuardDecision::Render);

    path.set("/admin".to_owned());
    assert_eq!(decision.get(), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn redirect_navigates_with_history_replacement() {
    let calls = RefCell::new(Vec::new());
    let navigate = |target: &str, options: NavigateOptions| calls.borrow_mut().push((target.to_owned(), options.replace));

    follow_redirect(GuardDecision::Redirect("/login"), &navigate);
    assert_eq!(calls.borrow().as_slice(), &[("/login".to_owned(), true)]);
}

#[test]
fn render_and_wait_do_not_navigate() {
    let calls = RefCell::new(0);
    let navigate = |_: &str, _: NavigateOptions| *calls.borrow_mut() += 1;

    follow_redirect(GuardDecision::Render, &navigate);
    follow_redirect(GuardDecision::Wait, &navigate);
    assert_eq!(*calls.borrow(), 0);
}
