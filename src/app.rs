//! Root application component with routing and context providers.
//!
//! Startup runs `init -> restore -> serve`: the session store is built with a
//! listener that mirrors every state change into a signal, the cached identity
//! is restored, and only then is the router mounted.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::layout::Layout;
use crate::config::PortalConfig;
use crate::net::auth::MockAuthService;
use crate::net::portal::MockPortalService;
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    admin_section::{AllocationsAdminPage, ApplicantsAdminPage},
    allotment::AllotmentPage,
    applications::ApplicationsPage,
    candidate_dashboard::CandidateDashboardPage,
    login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::session::SessionState;
use crate::state::session_store::SessionStore;
use crate::util::identity_cache::LocalStorageCache;
use crate::util::notify::Notifier;

/// Session store wired to the concrete auth and cache backends.
pub type PortalSession = SessionStore<MockAuthService, LocalStorageCache>;

/// Portal backend used by the pages.
pub type Portal = MockPortalService;

/// Owned session handle shared through context.
///
/// Views read `state` reactively and call the store for login, register and
/// logout; the store pushes every transition back into `state`.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<PortalSession>,
    state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Build the store and restore any cached identity.
    pub fn init(config: &PortalConfig) -> Self {
        let state = RwSignal::new(SessionState::default());
        let auth = MockAuthService::new(config.auth_latency());
        let cache = LocalStorageCache::new(config.storage_key.clone());
        let store = SessionStore::new(auth, cache).with_listener(move |snapshot| {
            _ = state.try_set(snapshot.clone());
        });
        store.restore();
        Self { store: Arc::new(store), state }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn store(&self) -> Arc<PortalSession> {
        Arc::clone(&self.store)
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::load();
    let session = SessionContext::init(&config);
    provide_context(session.state());
    provide_context(session);
    provide_context(Portal::from_config(&config));
    provide_context(Notifier::new(config.notice_ttl()));

    view! {
        <Title text="PM Internship Portal"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route path=StaticSegment("") view=|| view! { <Guarded/> }/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded><CandidateDashboardPage/></Guarded> }
                    />
                    <Route path=StaticSegment("applications") view=|| view! { <Guarded><ApplicationsPage/></Guarded> }/>
                    <Route path=StaticSegment("allotment") view=|| view! { <Guarded><AllotmentPage/></Guarded> }/>
                    <Route path=StaticSegment("admin") view=|| view! { <Guarded><AdminDashboardPage/></Guarded> }/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("applicants"))
                        view=|| view! { <Guarded><ApplicantsAdminPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("allocations"))
                        view=|| view! { <Guarded><AllocationsAdminPage/></Guarded> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
