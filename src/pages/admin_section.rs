//! Admin sections that only carry a heading for now.

use leptos::prelude::*;

#[component]
pub fn ApplicantsAdminPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Applicants Management"</h1>
            <p class="muted">"View and manage all candidate applications."</p>
        </div>
    }
}

#[component]
pub fn AllocationsAdminPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Allocation Management"</h1>
            <p class="muted">"Manage internship allocations and assignments."</p>
        </div>
    }
}
