//! Candidate's allotment result with confirmation.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::app::Portal;
use crate::net::portal::PortalService;
use crate::net::types::{AllocationStatus, Allotment};
use crate::state::remote::Remote;
use crate::state::session::SessionState;
use crate::util::format::{format_date_long, format_inr};
use crate::util::notify::Notifier;

#[component]
fn AllotmentDetails(allotment: Allotment, on_confirm: Callback<String>) -> impl IntoView {
    let status = allotment.status;
    let id = allotment.id.clone();
    let confirm = status.can_confirm().then(|| {
        view! {
            <div class="card__actions">
                <button class="btn btn--accent btn--lg" on:click=move |_| on_confirm.run(id.clone())>
                    "Confirm Allotment"
                </button>
            </div>
        }
    });
    let contact = allotment.company_contact;

    view! {
        <section class="card card--highlight">
            <div class="card__row">
                <h2 class="card__title">"Internship Allocated"</h2>
                <span class=status.badge_class()>{status.candidate_label()}</span>
            </div>
            <p class="card__description">"Congratulations! You have been allocated an internship position."</p>
        </section>

        <div class="two-column">
            <section class="card">
                <h2 class="card__title">"Internship Details"</h2>
                <h3>{allotment.company_name}</h3>
                <p class="accent strong">{allotment.job_title}</p>
                <ul class="detail-list">
                    <li>{allotment.location}</li>
                    <li>{allotment.duration}</li>
                    <li>{format!("{}/month", format_inr(allotment.stipend))}</li>
                    <li>{format_date_long(&allotment.start_date)}</li>
                </ul>
                <h4>"Job Description"</h4>
                <p class="muted small">{allotment.description}</p>
            </section>

            <section class="card">
                <h2 class="card__title">"Contact Information"</h2>
                <h4>"Company Contact"</h4>
                <p>{contact.name}</p>
                <a class="link" href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                <a class="link" href=format!("tel:{}", contact.phone)>{contact.phone.clone()}</a>
                <h4>"Important Dates"</h4>
                <dl class="date-list">
                    <dt>"Allocated:"</dt>
                    <dd>{format_date_long(&allotment.allocated_at)}</dd>
                    <dt>"Start Date:"</dt>
                    <dd class="strong">{format_date_long(&allotment.start_date)}</dd>
                    <dt>"End Date:"</dt>
                    <dd>{format_date_long(&allotment.end_date)}</dd>
                </dl>
                {confirm}
            </section>
        </div>
    }
}

#[component]
fn NoAllotment() -> impl IntoView {
    view! {
        <section class="card card--empty">
            <h3>"No Allotment Yet"</h3>
            <p class="muted">
                "Your internship allocation is still pending. The system is processing applications and will update your status soon."
            </p>
            <h4>"Next Steps:"</h4>
            <ul class="muted small">
                <li>"Applications are being reviewed"</li>
                <li>"Allocation algorithm is matching candidates"</li>
                <li>"Results will be available within 2-3 business days"</li>
            </ul>
        </section>
    }
}

#[component]
pub fn AllotmentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let portal = expect_context::<Portal>();
    let notifier = expect_context::<Notifier>();

    let allotment = RwSignal::new(Remote::<Option<Allotment>>::default());
    let candidate_id = session.with_untracked(|s| s.identity().and_then(|i| i.candidate_id()).map(str::to_owned));

    allotment.update(Remote::begin);
    {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = portal.allotment(candidate_id.as_deref().unwrap_or_default()).await;
            if let Some(Err(err)) = allotment.try_update(|remote| remote.settle(result)) {
                warn!("loading allotment failed: {err}");
                notifier.error("Error", "Failed to load allotment details. Please try again.");
            }
        });
    }

    let on_confirm = Callback::new(move |allotment_id: String| {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            match portal.confirm_allotment(&allotment_id).await {
                Ok(()) => {
                    allotment.try_update(|remote| {
                        remote.update(|current| {
                            if let Some(current) = current.as_mut() {
                                current.status = AllocationStatus::Confirmed;
                            }
                        });
                    });
                    notifier.success("Allotment Confirmed", "You have successfully confirmed your internship allotment.");
                }
                Err(err) => {
                    warn!("confirming allotment {allotment_id} failed: {err}");
                    notifier.error("Error", "Failed to confirm allotment. Please try again.");
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Allotment Status"</h1>
                <p class="muted">"View your internship allocation details and status"</p>
            </div>
            {move || {
                if allotment.with(Remote::is_loading) {
                    return view! { <div class="page__loading"><div class="spinner" aria-hidden="true"></div></div> }
                        .into_any();
                }
                match allotment.with(|remote| remote.value().clone()) {
                    Some(current) => view! { <AllotmentDetails allotment=current on_confirm/> }.into_any(),
                    None => view! { <NoAllotment/> }.into_any(),
                }
            }}
        </div>
    }
}
