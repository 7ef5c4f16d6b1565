//! Admin landing page: headline stats and the allocation run.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::app::Portal;
use crate::net::portal::PortalService;
use crate::net::types::{Allocation, DashboardStats};
use crate::state::remote::Remote;
use crate::util::format::format_count;
use crate::util::notify::Notifier;

#[component]
fn StatCard(title: &'static str, trend: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class="card stat">
            <p class="stat__title">{title}</p>
            <p class="stat__value">{move || format_count(value.get())}</p>
            <p class="muted small">{trend}</p>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let portal = expect_context::<Portal>();
    let notifier = expect_context::<Notifier>();

    let stats = RwSignal::new(Remote::<DashboardStats>::default());
    let allocations = RwSignal::new(Remote::<Vec<Allocation>>::default());

    stats.update(Remote::begin);
    {
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = portal.dashboard_stats().await;
            if let Some(Err(err)) = stats.try_update(|remote| remote.settle(result)) {
                warn!("loading dashboard stats failed: {err}");
                notifier.error("Error", "Failed to load dashboard statistics.");
            }
        });
    }

    let running = move || allocations.with(Remote::is_loading);
    let on_run = move |_| {
        if running() {
            return;
        }
        allocations.update(Remote::begin);
        let portal = portal.clone();
        leptos::task::spawn_local(async move {
            let result = portal.run_allocation().await;
            let allocated = result.as_ref().map(Vec::len).unwrap_or_default();
            match allocations.try_update(|remote| remote.settle(result)) {
                Some(Ok(())) => {
                    log!("allocation run produced {allocated} results");
                    notifier.success(
                        "Allocation Completed",
                        format!("Successfully allocated {allocated} candidates to internships."),
                    );
                }
                Some(Err(err)) => {
                    warn!("allocation run failed: {err}");
                    notifier.error("Allocation Failed", "Failed to run allocation algorithm. Please try again.");
                }
                None => {}
            }
        });
    };

    let stat = move |pick: fn(&DashboardStats) -> u32| Signal::derive(move || stats.with(|remote| pick(remote.value())));

    view! {
        <div class="page">
            <div class="page__header page__header--actions">
                <div>
                    <h1>"Admin Dashboard"</h1>
                    <p class="muted">"Manage internship allocations and monitor application progress."</p>
                </div>
                <button class="btn btn--accent btn--lg" on:click=on_run disabled=running>
                    {move || if running() { "Running Allocation..." } else { "Run Allocation" }}
                </button>
            </div>

            <div class="stats-grid">
                <StatCard title="Total Candidates" trend="+12% from last month" value=stat(|s| s.total_candidates)/>
                <StatCard title="Total Applications" trend="+8% from last month" value=stat(|s| s.total_applications)/>
                <StatCard
                    title="Allocations Completed"
                    trend="+23% from last month"
                    value=stat(|s| s.allocations_completed)
                />
                <StatCard title="Pending Allocations" trend="-5% from last week" value=stat(|s| s.pending_allocations)/>
            </div>

            <Show when=move || allocations.with(|remote| !remote.value().is_empty())>
                <section class="card">
                    <h2 class="card__title">"Recent Allocation Results"</h2>
                    <p class="card__description">"Latest results from the AI-powered allocation system"</p>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Candidate ID"</th>
                                <th>"Candidate Name"</th>
                                <th>"Allocated Company"</th>
                                <th>"Job Title"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || allocations.with(|remote| remote.value().clone())
                                key=|row| row.id.clone()
                                children=|row| {
                                    view! {
                                        <tr>
                                            <td class="mono">{row.candidate_id}</td>
                                            <td>{row.candidate_name}</td>
                                            <td>{row.company_name}</td>
                                            <td>{row.job_title}</td>
                                            <td><span class=row.status.badge_class()>{row.status.label()}</span></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}
