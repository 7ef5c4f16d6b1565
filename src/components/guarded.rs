//! Route wrapper applying the access decision before rendering its children.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::guard::GuardDecision;
use crate::state::session::SessionState;
use crate::util::auth::install_route_guard;

/// Render `children` only when the guard allows the current path.
///
/// Without children the wrapper only redirects, which is how the root path
/// forwards to the landing page.
#[component]
pub fn Guarded(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let decision = install_route_guard(session, location.pathname, use_navigate());

    move || match decision.get() {
        GuardDecision::Render => children.as_ref().map(|children| children()).into_any(),
        GuardDecision::Wait => view! {
            <div class="guard-placeholder">
                <div class="spinner" aria-hidden="true"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! { <p class="guard-placeholder">"Redirecting..."</p> }.into_any(),
    }
}
