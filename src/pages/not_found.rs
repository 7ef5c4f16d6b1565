//! Fallback page for unknown routes.

use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        error!("404: no route matches {}", pathname.get());
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a class="btn btn--primary" href=paths::ROOT>"Return to Home"</a>
        </div>
    }
}
