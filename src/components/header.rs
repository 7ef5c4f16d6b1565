//! Portal header with the signed-in identity and logout.

use leptos::logging::log;
use leptos::prelude::*;

use crate::app::SessionContext;
use crate::state::session::Identity;
use crate::util::notify::Notifier;

/// `candidate (CAND001)` or `admin`.
fn role_line(identity: &Identity) -> String {
    match identity.candidate_id() {
        Some(candidate_id) => format!("{} ({candidate_id})", identity.role().as_str()),
        None => identity.role().as_str().to_owned(),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let state = session.state();
    let identity = move || state.with(|s| s.identity().cloned());

    let on_logout = move |_| {
        let settled = session.store().logout();
        log!("signed out (authenticated={})", settled.is_authenticated());
        notifier.info("Signed Out", "You have been logged out of the portal.");
    };

    view! {
        <header class="portal-header">
            <div class="portal-header__brand">
                <div class="portal-header__logo" aria-hidden="true">"⛨"</div>
                <div>
                    <h1 class="portal-header__title">"PM Internship Portal"</h1>
                    <p class="portal-header__subtitle">"Government of India Initiative"</p>
                </div>
            </div>
            {move || {
                identity()
                    .map(|identity| {
                        let on_logout = on_logout.clone();
                        view! {
                            <div class="portal-header__user">
                                <div class="portal-header__identity">
                                    <p class="portal-header__name">{identity.name().to_owned()}</p>
                                    <p class="portal-header__role">{role_line(&identity)}</p>
                                </div>
                                <button class="btn btn--outline btn--sm" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
