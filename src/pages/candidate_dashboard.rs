//! Candidate landing page: fetch recommendations and apply.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::app::Portal;
use crate::net::portal::PortalService;
use crate::net::types::Recommendation;
use crate::state::remote::Remote;
use crate::state::session::SessionState;
use crate::util::format::format_inr;
use crate::util::notify::Notifier;

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let portal = expect_context::<Portal>();
    let notifier = expect_context::<Notifier>();

    let identity = move || session.with(|s| s.identity().cloned());
    let candidate_id = RwSignal::new(session.with_untracked(|s| {
        s.identity().and_then(|identity| identity.candidate_id()).unwrap_or_default().to_owned()
    }));
    let recommendations = RwSignal::new(Remote::<Vec<Recommendation>>::default());

    let on_fetch = {
        let portal = portal.clone();
        move |_| {
            if recommendations.with(Remote::is_loading) {
                return;
            }
            let id = candidate_id.get().trim().to_owned();
            if id.is_empty() {
                notifier.error("Candidate ID Required", "Please enter your candidate ID to get recommendations.");
                return;
            }
            recommendations.update(Remote::begin);
            let portal = portal.clone();
            leptos::task::spawn_local(async move {
                let result = portal.recommendations(&id).await;
                let found = result.as_ref().map(Vec::len).ok();
                match recommendations.try_update(|remote| remote.settle(result)) {
                    Some(Ok(())) => notifier.success(
                        "Recommendations Loaded",
                        format!("Found {} internship recommendations for you.", found.unwrap_or_default()),
                    ),
                    Some(Err(err)) => {
                        warn!("recommendations for {id} failed: {err}");
                        notifier.error("Error", "Failed to load recommendations. Please try again.");
                    }
                    None => {}
                }
            });
        }
    };

    let apply = Callback::new(move |(internship_id, company_name): (String, String)| {
        let portal = portal.clone();
        let id = candidate_id.get_untracked().trim().to_owned();
        leptos::task::spawn_local(async move {
            match portal.submit_application(&id, &internship_id).await {
                Ok(_) => notifier.success(
                    "Application Submitted",
                    format!("Your application to {company_name} has been submitted successfully."),
                ),
                Err(err) => {
                    warn!("application to {internship_id} failed: {err}");
                    notifier.error("Application Failed", "Failed to submit application. Please try again.");
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Candidate Dashboard"</h1>
                <p class="muted">
                    "Welcome back, " {move || identity().map(|i| i.name().to_owned()).unwrap_or_default()}
                    "! Find your perfect internship match."
                </p>
            </div>

            <section class="card">
                <h2 class="card__title">"Get Personalized Recommendations"</h2>
                <p class="card__description">
                    "Enter your candidate ID to receive AI-powered internship recommendations tailored to your profile."
                </p>
                <div class="search-row">
                    <label for="candidateId">"Candidate ID"</label>
                    <input
                        id="candidateId"
                        class="input"
                        placeholder="Enter your candidate ID (e.g., CAND001)"
                        prop:value=move || candidate_id.get()
                        on:input=move |ev| candidate_id.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--accent btn--lg"
                        on:click=on_fetch
                        disabled=move || recommendations.with(Remote::is_loading)
                    >
                        {move || if recommendations.with(Remote::is_loading) { "Loading..." } else { "Get Recommendations" }}
                    </button>
                </div>
            </section>

            <Show when=move || recommendations.with(|r| !r.value().is_empty())>
                <section class="card">
                    <h2 class="card__title">"Recommended Internships"</h2>
                    <p class="card__description">"Internships matched to your profile and preferences"</p>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Company & Role"</th>
                                <th>"Match Score"</th>
                                <th>"Details"</th>
                                <th>"Stipend"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || recommendations.with(|r| r.value().clone())
                                key=|rec| rec.internship.id.clone()
                                children=move |rec| {
                                    let tier = rec.tier();
                                    let internship = rec.internship;
                                    let on_apply = {
                                        let internship_id = internship.id.clone();
                                        let company_name = internship.company_name.clone();
                                        move |_| apply.run((internship_id.clone(), company_name.clone()))
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <p class="strong">{internship.company_name}</p>
                                                <p>{internship.job_title}</p>
                                                <p class="muted small clamp-2">{internship.description}</p>
                                            </td>
                                            <td>
                                                <span class="strong">{format!("{}%", rec.match_score)}</span>
                                                " "
                                                <span class=format!("badge {}", tier.css_class())>{tier.label()}</span>
                                                <progress max="100" value=rec.match_score.to_string()></progress>
                                            </td>
                                            <td class="small">
                                                <p>{internship.location}</p>
                                                <p>{internship.duration}</p>
                                            </td>
                                            <td>
                                                <span class="strong">{format_inr(internship.stipend)}</span>
                                                <span class="muted small">"/month"</span>
                                            </td>
                                            <td>
                                                <button class="btn btn--accent btn--sm" on:click=on_apply>
                                                    "Apply"
                                                </button>
                                            </td>
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
