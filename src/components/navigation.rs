//! Role-specific side navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::nav_items;
use crate::state::session::SessionState;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;

    let items = move || session.with(SessionState::role).map(nav_items).unwrap_or_default();

    view! {
        <nav class="portal-nav">
            {move || {
                items()
                    .iter()
                    .map(|item| {
                        let active = move || pathname.with(|path| item.is_active(path));
                        view! {
                            <a
                                href=item.path
                                class=move || {
                                    if active() { "portal-nav__item portal-nav__item--active" } else { "portal-nav__item" }
                                }
                                aria-current=move || active().then_some("page")
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
