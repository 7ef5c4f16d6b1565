use super::*;
use crate::net::auth::MockAuthService;
use crate::state::session::Role;
use crate::util::identity_cache::MemoryCache;
use futures::channel::oneshot;
use futures::executor::block_on;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use std::task::Poll;
use std::time::Duration;

fn mock_store(cache: MemoryCache) -> SessionStore<MockAuthService, MemoryCache> {
    SessionStore::new(MockAuthService::new(Duration::ZERO), cache)
}

fn credentials(email: &str, role: Role) -> LoginCredentials {
    LoginCredentials { email: email.to_owned(), password: "x".to_owned(), role }
}

fn identity(id: &str, name: &str, email: &str, role: Role, candidate_id: Option<&str>) -> Identity {
    Identity::new(id, name, email, role, candidate_id.map(str::to_owned)).unwrap()
}

/// Auth service whose calls resolve only when the test sends their outcome.
struct GatedAuth {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<Identity, AuthError>>>>,
}

impl GatedAuth {
    fn new(receivers: Vec<oneshot::Receiver<Result<Identity, AuthError>>>) -> Self {
        Self { pending: Mutex::new(receivers.into()) }
    }

    fn next(&self) -> impl Future<Output = Result<Identity, AuthError>> + use<> {
        let receiver = self.pending.lock().unwrap().pop_front().expect("unexpected auth call");
        async move { receiver.await.unwrap_or_else(|_| Err(AuthError::Unavailable("gate dropped".to_owned()))) }
    }
}

impl AuthService for GatedAuth {
    fn login(&self, _credentials: &LoginCredentials) -> impl Future<Output = Result<Identity, AuthError>> {
        self.next()
    }

    fn register(&self, _data: &RegisterData) -> impl Future<Output = Result<Identity, AuthError>> {
        self.next()
    }
}

async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

// =============================================================
// restore
// =============================================================

#[test]
fn new_store_starts_loading() {
    let store = mock_store(MemoryCache::new());
    assert_eq!(store.state(), SessionState::default());
}

#[test]
fn restore_without_cache_settles_signed_out() {
    let store = mock_store(MemoryCache::new());
    assert_eq!(store.restore(), SessionState::signed_out());
}

#[test]
fn restore_round_trips_cached_identity() {
    let admin = identity("7", "Admin User", "a@b.com", Role::Admin, None);
    let store = mock_store(MemoryCache::seeded(admin.to_cache_blob().unwrap()));
    let state = store.restore();
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.identity(), Some(&admin));
}

#[test]
fn restore_discards_corrupted_cache_entry() {
    let store = mock_store(MemoryCache::seeded("{\"id\": 1, oops"));
    let state = store.restore();
    assert_eq!(state, SessionState::signed_out());
    assert_eq!(store.cache().load(), None);
}

#[test]
fn restore_discards_entry_breaking_candidate_rule() {
    let store = mock_store(MemoryCache::seeded(r#"{"id":"1","name":"X","email":"x@y.z","role":"candidate"}"#));
    assert_eq!(store.restore(), SessionState::signed_out());
    assert_eq!(store.cache().load(), None);
}

// =============================================================
// login / register / logout
// =============================================================

#[test]
fn login_any_credentials_authenticates_with_chosen_role() {
    for role in [Role::Candidate, Role::Admin] {
        let store = mock_store(MemoryCache::new());
        store.restore();
        block_on(store.login(credentials("someone@example.com", role))).unwrap();
        let state = store.state();
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        assert_eq!(state.role(), Some(role));
    }
}

#[test]
fn login_admin_scenario() {
    let store = mock_store(MemoryCache::new());
    store.restore();
    let admin = block_on(store.login(credentials("a@b.com", Role::Admin))).unwrap();
    assert_eq!(admin.name(), "Admin User");
    assert_eq!(admin.role(), Role::Admin);
    assert_eq!(admin.candidate_id(), None);
    assert_eq!(store.state().identity(), Some(&admin));
}

#[test]
fn login_persists_identity_for_next_restore() {
    let store = mock_store(MemoryCache::new());
    store.restore();
    let candidate = block_on(store.login(credentials("c@d.com", Role::Candidate))).unwrap();

    let blob = store.cache().load().expect("identity cached");
    let reloaded = mock_store(MemoryCache::seeded(blob));
    assert_eq!(reloaded.restore().identity(), Some(&candidate));
}

#[test]
fn register_candidate_scenario() {
    let store = mock_store(MemoryCache::new());
    store.restore();
    let data = RegisterData {
        name: "Jane".to_owned(),
        email: "j@x.com".to_owned(),
        password: "y".to_owned(),
        role: Role::Candidate,
        candidate_id: Some("CAND099".to_owned()),
    };
    let first = block_on(store.register(data.clone())).unwrap();
    assert_eq!(first.name(), "Jane");
    assert_eq!(first.role(), Role::Candidate);
    assert_eq!(first.candidate_id(), Some("CAND099"));

    let second = block_on(store.register(data)).unwrap();
    assert_ne!(first.id(), second.id());
    assert_eq!(store.state().identity(), Some(&second));
}

#[test]
fn register_failure_clears_loading_and_keeps_prior_session() {
    let store = mock_store(MemoryCache::new());
    store.restore();
    let admin = block_on(store.login(credentials("a@b.com", Role::Admin))).unwrap();
    let data = RegisterData {
        name: "Jane".to_owned(),
        email: "j@x.com".to_owned(),
        password: "y".to_owned(),
        role: Role::Candidate,
        candidate_id: None,
    };
    let err = block_on(store.register(data)).unwrap_err();
    assert!(matches!(err, AuthError::Identity(_)));
    let state = store.state();
    assert!(!state.is_loading());
    assert_eq!(state.identity(), Some(&admin));
}

#[test]
fn login_fails_when_cache_rejects_identity() {
    let store = mock_store(MemoryCache::rejecting());
    store.restore();
    let err = block_on(store.login(credentials("a@b.com", Role::Admin))).unwrap_err();
    assert!(matches!(err, AuthError::Persist(_)));
    assert_eq!(store.state(), SessionState::signed_out());
}

#[test]
fn logout_always_signs_out_and_clears_cache() {
    let store = mock_store(MemoryCache::new());
    assert_eq!(store.logout(), SessionState::signed_out());

    block_on(store.login(credentials("a@b.com", Role::Admin))).unwrap();
    assert_eq!(store.logout(), SessionState::signed_out());
    assert_eq!(store.cache().load(), None);
}

#[test]
fn listener_sees_loading_then_settled() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let store = mock_store(MemoryCache::new()).with_listener(move |state| sink.lock().unwrap().push(state.clone()));
    store.restore();
    block_on(store.login(credentials("a@b.com", Role::Candidate))).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(!seen[0].is_loading());
    assert!(seen[1].is_loading());
    assert!(!seen[1].is_authenticated());
    assert!(seen[2].is_authenticated());
    assert!(!seen[2].is_loading());
}

// =============================================================
// overlapping attempts
// =============================================================

#[test]
fn newest_login_wins_when_it_settles_last() {
    let first = identity("1", "Admin User", "first@x.com", Role::Admin, None);
    let second = identity("2", "John Candidate", "second@x.com", Role::Candidate, Some("CAND001"));
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let store = SessionStore::new(GatedAuth::new(vec![rx_first, rx_second]), MemoryCache::new());
    store.restore();

    let (r_first, r_second, ()) = block_on(async {
        futures::join!(
            store.login(credentials("first@x.com", Role::Admin)),
            store.login(credentials("second@x.com", Role::Candidate)),
            async {
                tx_first.send(Ok(first.clone())).unwrap();
                yield_now().await;
                assert!(store.state().is_loading());
                tx_second.send(Ok(second.clone())).unwrap();
            },
        )
    });

    assert_eq!(r_first, Err(AuthError::Superseded));
    assert_eq!(r_second, Ok(second.clone()));
    assert_eq!(store.state(), SessionState::signed_in(second.clone()));
    assert_eq!(store.cache().load(), Some(second.to_cache_blob().unwrap()));
}

#[test]
fn stale_login_settling_last_is_discarded() {
    let first = identity("1", "Admin User", "first@x.com", Role::Admin, None);
    let second = identity("2", "John Candidate", "second@x.com", Role::Candidate, Some("CAND001"));
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let store = SessionStore::new(GatedAuth::new(vec![rx_first, rx_second]), MemoryCache::new());
    store.restore();

    let (r_first, r_second, ()) = block_on(async {
        futures::join!(
            store.login(credentials("first@x.com", Role::Admin)),
            store.login(credentials("second@x.com", Role::Candidate)),
            async {
                tx_second.send(Ok(second.clone())).unwrap();
                yield_now().await;
                assert_eq!(store.state(), SessionState::signed_in(second.clone()));
                tx_first.send(Ok(first.clone())).unwrap();
            },
        )
    });

    assert_eq!(r_first, Err(AuthError::Superseded));
    assert!(r_second.is_ok());
    let state = store.state();
    let current = state.identity().expect("signed in");
    assert_eq!(current, &second);
    assert_eq!(current.email(), "second@x.com");
    assert_eq!(current.candidate_id(), Some("CAND001"));
    assert_eq!(store.cache().load(), Some(second.to_cache_blob().unwrap()));
}

#[test]
fn logout_during_login_discards_the_login() {
    let admin = identity("1", "Admin User", "a@b.com", Role::Admin, None);
    let (tx, rx) = oneshot::channel();
    let store = SessionStore::new(GatedAuth::new(vec![rx]), MemoryCache::new());
    store.restore();

    let (result, ()) = block_on(async {
        futures::join!(store.login(credentials("a@b.com", Role::Admin)), async {
            store.logout();
            tx.send(Ok(admin.clone())).unwrap();
        })
    });

    assert_eq!(result, Err(AuthError::Superseded));
    assert_eq!(store.state(), SessionState::signed_out());
    assert_eq!(store.cache().load(), None);
}
