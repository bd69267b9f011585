use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::testing::FakeTransport;
use crate::state::session::MemoryStorage;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

/// Navigate stand-in that records every call.
fn recording_navigate() -> (Rc<RefCell<Vec<(String, bool)>>>, impl Fn(&str, NavigateOptions)) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let navigate = move |path: &str, opts: NavigateOptions| sink.borrow_mut().push((path.to_owned(), opts.replace));
    (calls, navigate)
}

#[test]
fn should_redirect_unauth_when_restored_and_anonymous() {
    assert!(should_redirect_unauth(true, false));
}

#[test]
fn should_not_redirect_before_restore() {
    assert!(!should_redirect_unauth(false, false));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(true, true));
}

#[test]
fn gate_redirects_exactly_once_while_anonymous() {
    let mut gate = RedirectGate::default();
    let fired: Vec<bool> = (0..4).map(|_| gate.observe(true, false)).collect();
    assert_eq!(fired, vec![true, false, false, false]);
}

#[test]
fn gate_waits_for_restore() {
    let mut gate = RedirectGate::default();
    assert!(!gate.observe(false, false));
    assert!(gate.observe(true, false));
}

#[test]
fn gate_rearms_after_login_then_logout() {
    let mut gate = RedirectGate::default();
    assert!(gate.observe(true, false));
    assert!(!gate.observe(true, true));
    assert!(gate.observe(true, false));
}

#[test]
fn gate_never_fires_when_authenticated() {
    let mut gate = RedirectGate::default();
    assert!(!gate.observe(true, true));
    assert!(!gate.observe(true, true));
}

#[test]
fn redirect_uses_history_replace() {
    assert!(replace_options().replace);
}

#[test]
fn guard_step_waits_for_restore_then_replaces_once() {
    with_owner(|| {
        let auth = AuthSession::new(MemoryStorage::default());
        let (calls, navigate) = recording_navigate();
        let mut gate = RedirectGate::default();

        assert!(!step_unauth_redirect(&mut gate, auth, &navigate));
        assert!(calls.borrow().is_empty());

        auth.restore();
        let fired: Vec<bool> = (0..3).map(|_| step_unauth_redirect(&mut gate, auth, &navigate)).collect();

        assert_eq!(fired, vec![true, false, false]);
        assert_eq!(*calls.borrow(), vec![(LOGIN_ROUTE.to_owned(), true)]);
    });
}

#[test]
fn guard_step_rearms_after_login_and_logout() {
    with_owner(|| {
        let auth = AuthSession::new(MemoryStorage::default());
        let (calls, navigate) = recording_navigate();
        let mut gate = RedirectGate::default();
        auth.restore();
        step_unauth_redirect(&mut gate, auth, &navigate);

        let transport = FakeTransport::default();
        transport.respond(200, r#"{"access_token":"abc","user":{"id":1,"email":"a@b.com"}}"#);
        block_on(auth.login_with(&transport.client(None), "a@b.com", "pw")).unwrap();
        assert!(!step_unauth_redirect(&mut gate, auth, &navigate));

        auth.logout();
        assert!(step_unauth_redirect(&mut gate, auth, &navigate));
        assert_eq!(calls.borrow().len(), 2);
    });
}

#[test]
fn guard_step_never_redirects_restored_session() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        storage.set(crate::state::session::TOKEN_KEY, "abc");
        storage.set(crate::state::session::USER_KEY, r#"{"id":1,"email":"a@b.com"}"#);
        let auth = AuthSession::new(storage);
        let (calls, navigate) = recording_navigate();
        let mut gate = RedirectGate::default();

        auth.restore();

        assert!(!step_unauth_redirect(&mut gate, auth, &navigate));
        assert!(calls.borrow().is_empty());
    });
}
