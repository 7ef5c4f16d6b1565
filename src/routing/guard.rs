//! Per-navigation access decision.
//!
//! Pure function of (route, session snapshot); the view layer
//! re-runs it whenever either the location or the session signal changes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{RouteSpec, landing_path, paths, route_for};
use crate::state::session::SessionState;

/// What the router should do with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested view.
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    /// Session restore has not finished; show a placeholder.
    Wait,
}

/// Decide access to `route` for the current session.
pub fn evaluate(route: &RouteSpec, session: &SessionState) -> GuardDecision {
    let role = session.role();

    if route.path == paths::LOGIN {
        return role.map_or(GuardDecision::Render, |role| GuardDecision::Redirect(landing_path(role)));
    }
    if route.is_public() {
        return GuardDecision::Render;
    }
    match role {
        None if session.is_loading() => GuardDecision::Wait,
        None => GuardDecision::Redirect(paths::LOGIN),
        Some(role) if !route.permits(role) => GuardDecision::Redirect(landing_path(role)),
        Some(_) => GuardDecision::Render,
    }
}

/// The root path never renders: it forwards to the landing page or login.
pub fn evaluate_root(session: &SessionState) -> GuardDecision {
    match session.role() {
        Some(role) => GuardDecision::Redirect(landing_path(role)),
        None if session.is_loading() => GuardDecision::Wait,
        None => GuardDecision::Redirect(paths::LOGIN),
    }
}

/// Evaluate using the route table. Unknown paths are public (not-found page).
pub fn evaluate_path(path: &str, session: &SessionState) -> GuardDecision {
    if path == paths::ROOT {
        return evaluate_root(session);
    }
    match route_for(path) {
        Some(route) => evaluate(route, session),
        None => GuardDecision::Render,
    }
}
