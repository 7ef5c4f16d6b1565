//! Owner of the session: restore, login, register, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app builds one store at startup, calls [`SessionStore::restore`], then
//! hands it to the view layer through Leptos context. A listener mirrors every
//! transition into the reactive `RwSignal<SessionState>` that guards and pages
//! observe.
//!
//! CONCURRENCY
//! ===========
//! Login and register each suspend once on the auth service. Every attempt is
//! stamped with a generation number when it starts; when it settles, its result
//! applies only if no newer attempt (or logout) has started since. Stale results
//! are dropped without touching state or the cache. State sits behind a single
//! mutex and the listener is always called after the lock is released.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::net::auth::{AuthError, AuthService, LoginCredentials, RegisterData};
use crate::state::session::{Identity, SessionState};
use crate::util::identity_cache::{CacheError, IdentityCache};

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

struct Inner {
    state: SessionState,
    generation: u64,
}

/// Session store over an auth service `A` and an identity cache `C`.
pub struct SessionStore<A, C> {
    auth: A,
    cache: C,
    inner: Mutex<Inner>,
    listener: Option<Listener>,
}

impl<A, C> SessionStore<A, C>
where
    A: AuthService,
    C: IdentityCache,
{
    /// New store in the startup state (no identity, loading).
    pub fn new(auth: A, cache: C) -> Self {
        Self {
            auth,
            cache,
            inner: Mutex::new(Inner { state: SessionState::default(), generation: 0 }),
            listener: None,
        }
    }

    /// Call `listener` with a snapshot after every state transition.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&SessionState) + Send + Sync + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Load the cached identity, if any. Runs once at startup.
    ///
    /// A blob that fails to decode is removed and the session settles signed
    /// out; the failure is logged but never returned.
    pub fn restore(&self) -> SessionState {
        let next = match self.cache.load() {
            None => SessionState::signed_out(),
            Some(raw) => match Identity::from_cache_blob(&raw) {
                Ok(identity) => {
                    leptos::logging::log!("session restored for {} ({})", identity.email(), identity.role().as_str());
                    SessionState::signed_in(identity)
                }
                Err(e) => {
                    leptos::logging::warn!("discarding cached identity: {e}");
                    self.cache.clear();
                    SessionState::signed_out()
                }
            },
        };
        self.transition(|inner| inner.state = next)
    }

    /// Sign in with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns the auth service's error, [`AuthError::Persist`] when the cache
    /// refuses the identity, or [`AuthError::Superseded`] when a newer attempt
    /// or a logout started while this one was in flight.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<Identity, AuthError> {
        let generation = self.begin_attempt();
        let outcome = self.auth.login(&credentials).await;
        self.settle(generation, outcome)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn register(&self, data: RegisterData) -> Result<Identity, AuthError> {
        let generation = self.begin_attempt();
        let outcome = self.auth.register(&data).await;
        self.settle(generation, outcome)
    }

    /// Clear the cache and drop the session. Also invalidates in-flight attempts.
    pub fn logout(&self) -> SessionState {
        self.transition(|inner| {
            inner.generation += 1;
            self.cache.clear();
            inner.state = SessionState::signed_out();
        })
    }

    fn begin_attempt(&self) -> u64 {
        let mut generation = 0;
        self.transition(|inner| {
            inner.generation += 1;
            generation = inner.generation;
            inner.state.set_loading(true);
        });
        generation
    }

    fn settle(&self, generation: u64, outcome: Result<Identity, AuthError>) -> Result<Identity, AuthError> {
        let mut result = Err(AuthError::Superseded);
        self.transition(|inner| {
            if inner.generation != generation {
                leptos::logging::log!("dropping sign-in attempt {generation}; attempt {} is newer", inner.generation);
                return;
            }
            result = outcome.and_then(|identity| {
                let blob = identity.to_cache_blob().map_err(CacheError::from)?;
                self.cache.store(&blob)?;
                Ok(identity)
            });
            match &result {
                Ok(identity) => inner.state = SessionState::signed_in(identity.clone()),
                Err(e) => {
                    leptos::logging::warn!("sign-in attempt {generation} failed: {e}");
                    inner.state.set_loading(false);
                }
            }
        });
        result
    }

    fn transition(&self, apply: impl FnOnce(&mut Inner)) -> SessionState {
        let snapshot = {
            let mut inner = self.lock();
            apply(&mut inner);
            inner.state.clone()
        };
        if let Some(listener) = &self.listener {
            listener(&snapshot);
        }
        snapshot
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
