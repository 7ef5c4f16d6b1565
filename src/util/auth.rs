//! Route guard wiring for views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded view applies the same decision table from
//! [`crate::routing::guard`]. This module turns it into a memoized decision and
//! an effect that performs redirects with history replacement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::guard::{GuardDecision, evaluate_path};
use crate::state::session::SessionState;

/// Guard decision for `pathname`, recomputed when the session or the path changes.
pub fn route_decision(session: RwSignal<SessionState>, pathname: Memo<String>) -> Memo<GuardDecision> {
    Memo::new(move |_| session.with(|state| pathname.with(|path| evaluate_path(path, state))))
}

/// Navigate for a `Redirect` decision, replacing the current history entry.
pub fn follow_redirect(decision: GuardDecision, navigate: &impl Fn(&str, NavigateOptions)) {
    if let GuardDecision::Redirect(target) = decision {
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Track the guard decision for the current path and redirect when it says so.
///
/// A logout on a guarded page sends the user to `/login` without another
/// navigation.
pub fn install_route_guard<F>(
    session: RwSignal<SessionState>,
    pathname: Memo<String>,
    navigate: F,
) -> Memo<GuardDecision>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let decision = route_decision(session, pathname);
    Effect::new(move || follow_redirect(decision.get(), &navigate));
    decision
}
