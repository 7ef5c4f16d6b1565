//! Page frame: header, role navigation and the main content area.

use leptos::prelude::*;

use super::header::Header;
use super::navigation::Navigation;
use super::notice_tray::NoticeTray;
use crate::state::session::SessionState;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.with(SessionState::is_authenticated);

    view! {
        <div class="app-shell">
            <Header/>
            <div class="app-shell__body">
                <Show when=signed_in>
                    <Navigation/>
                </Show>
                <main class=move || if signed_in() { "app-shell__main" } else { "app-shell__main app-shell__main--narrow" }>
                    {children()}
                </main>
            </div>
            <NoticeTray/>
        </div>
    }
}
