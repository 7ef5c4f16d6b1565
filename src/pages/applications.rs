//! Candidate's application history with per-status counts and withdrawal.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::app::Portal;
use crate::net::portal::PortalService;
use crate::net::types::{Application, ApplicationCounts};
use crate::routing::paths;
use crate::state::remote::Remote;
use crate::state::session::SessionState;
use crate::util::format::{format_date, format_inr};
use crate::util::notify::Notifier;

#[component]
fn CountCard(label: &'static str, count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="card card--compact">
            <p class="stat__value">{move || count.get()}</p>
            <p class="muted small">{label}</p>
        </div>
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let portal = expect_context::<Portal>();
    let notifier = expect_context::<Notifier>();

    let applications = RwSignal::new(Remote::<Vec<Application>>::default());
    let candidate_id = session.with_untracked(|s| s.identity().and_then(|i| i.candidate_id()).map(str::to_owned));

    applications.update(Remote::begin);
    {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = portal.applications(candidate_id.as_deref().unwrap_or_default()).await;
            if let Some(Err(err)) = applications.try_update(|remote| remote.settle(result)) {
                warn!("loading applications failed: {err}");
                notifier.error("Error", "Failed to load applications. Please try again.");
            }
        });
    }

    let withdraw = Callback::new(move |(application_id, company_name): (String, String)| {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            match portal.withdraw_application(&application_id).await {
                Ok(()) => {
                    applications.try_update(|remote| {
                        remote.update(|items| items.retain(|app| app.id != application_id));
                    });
                    notifier.success(
                        "Application Withdrawn",
                        format!("Your application to {company_name} has been withdrawn successfully."),
                    );
                }
                Err(err) => {
                    warn!("withdrawing {application_id} failed: {err}");
                    notifier.error("Error", "Failed to withdraw application. Please try again.");
                }
            }
        });
    });

    let counts = Memo::new(move |_| applications.with(|remote| ApplicationCounts::tally(remote.value())));

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"My Applications"</h1>
                <p class="muted">"Track the status of your internship applications"</p>
            </div>

            <Show
                when=move || !applications.with(Remote::is_loading)
                fallback=move || view! { <div class="page__loading"><div class="spinner" aria-hidden="true"></div></div> }
            >
                <div class="stats-grid">
                    <CountCard label="Total Applications" count=Signal::derive(move || counts.get().total)/>
                    <CountCard label="Pending" count=Signal::derive(move || counts.get().pending)/>
                    <CountCard label="Under Review" count=Signal::derive(move || counts.get().reviewed)/>
                    <CountCard label="Accepted" count=Signal::derive(move || counts.get().accepted)/>
                    <CountCard label="Rejected" count=Signal::derive(move || counts.get().rejected)/>
                </div>

                <Show
                    when=move || !counts.get().is_empty()
                    fallback=|| {
                        view! {
                            <section class="card card--empty">
                                <h3>"No Applications Yet"</h3>
                                <p class="muted">
                                    "You haven't applied to any internships yet. Visit the dashboard to find recommendations."
                                </p>
                                <a class="btn btn--accent" href=paths::DASHBOARD>"Find Internships"</a>
                            </section>
                        }
                    }
                >
                    <section class="card">
                        <h2 class="card__title">"Application History"</h2>
                        <p class="card__description">
                            "Your submitted internship applications and their current status"
                        </p>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Company & Role"</th>
                                    <th>"Applied Date"</th>
                                    <th>"Location"</th>
                                    <th>"Stipend"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || applications.with(|remote| remote.value().clone())
                                    key=|app| app.id.clone()
                                    children=move |app| {
                                        let on_withdraw = {
                                            let id = app.id.clone();
                                            let company = app.company_name.clone();
                                            move |_| withdraw.run((id.clone(), company.clone()))
                                        };
                                        let withdraw_button = app.status.can_withdraw().then(|| {
                                            view! {
                                                <button class="btn btn--outline btn--sm" on:click=on_withdraw>
                                                    "Withdraw"
                                                </button>
                                            }
                                        });
                                        view! {
                                            <tr>
                                                <td>
                                                    <p class="strong">{app.company_name}</p>
                                                    <p class="small">{app.job_title}</p>
                                                </td>
                                                <td class="small">{format_date(&app.applied_at)}</td>
                                                <td class="small">{app.location}</td>
                                                <td class="strong">{format!("{}/month", format_inr(app.stipend))}</td>
                                                <td>
                                                    <span class=app.status.badge_class()>{app.status.label()}</span>
                                                </td>
                                                <td>{withdraw_button}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </section>
                </Show>
            </Show>
        </div>
    }
}
