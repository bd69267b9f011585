use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::error::ApiError;
use crate::net::testing::FakeTransport;
use crate::net::types::User;
use crate::state::session::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};

// =============================================================
// Helpers
// =============================================================

const AUTH_BODY: &str = r#"{"access_token":"abc","user":{"id":1,"email":"a@b.com"}}"#;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

fn expected_user() -> User {
    User { id: 1, email: "a@b.com".to_owned(), name: None }
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn login_success_sets_token_and_user_and_persists_both() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        let auth = AuthSession::new(storage.clone());
        let transport = FakeTransport::default();
        transport.respond(200, AUTH_BODY);

        block_on(auth.login_with(&transport.client(None), "a@b.com", "pw")).unwrap();

        assert_eq!(auth.token_untracked().as_deref(), Some("abc"));
        assert_eq!(auth.session_untracked().user(), Some(&expected_user()));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        let stored: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored, expected_user());
    });
}

#[test]
fn login_failure_leaves_session_and_storage_unchanged() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        let auth = AuthSession::new(storage.clone());
        let transport = FakeTransport::default();
        transport.respond(401, r#"{"detail":"Invalid credentials"}"#);

        let err = block_on(auth.login_with(&transport.client(None), "a@b.com", "bad")).unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(auth.session_untracked(), Session::anonymous());
        assert!(storage.is_empty());
    });
}

#[test]
fn failed_login_keeps_existing_session() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        let auth = AuthSession::new(storage.clone());
        let transport = FakeTransport::default();
        transport.respond(200, AUTH_BODY).fail(ApiError::Transport("offline".to_owned()));

        block_on(auth.login_with(&transport.client(None), "a@b.com", "pw")).unwrap();
        let before = auth.session_untracked();
        let _ = block_on(auth.login_with(&transport.client(None), "x@y.com", "pw"));

        assert_eq!(auth.session_untracked(), before);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    });
}

#[test]
fn register_success_sets_session() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        let auth = AuthSession::new(storage.clone());
        let transport = FakeTransport::default();
        transport.respond(200, r#"{"access_token":"new","user":{"id":9,"email":"n@b.com","name":"Nia"}}"#);

        block_on(auth.register_with(&transport.client(None), "n@b.com", Some("Nia"), "secret1")).unwrap();

        assert_eq!(auth.token_untracked().as_deref(), Some("new"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new"));
        assert!(transport.last_request().url.ends_with("/register"));
    });
}

// =============================================================
// Logout / restore
// =============================================================

#[test]
fn logout_clears_session_and_storage() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        let auth = AuthSession::new(storage.clone());
        let transport = FakeTransport::default();
        transport.respond(200, AUTH_BODY);
        block_on(auth.login_with(&transport.client(None), "a@b.com", "pw")).unwrap();

        auth.logout();

        assert_eq!(auth.token_untracked(), None);
        assert_eq!(auth.session_untracked().user(), None);
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
        assert_eq!(transport.requests().len(), 1);
    });
}

#[test]
fn restore_picks_up_persisted_session() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, r#"{"id":1,"email":"a@b.com"}"#);

        let auth = AuthSession::new(storage);
        assert_eq!(auth.token_untracked(), None);

        auth.restore();

        assert_eq!(auth.session_untracked(), Session::authenticated("abc".to_owned(), expected_user()));
    });
}

#[test]
fn client_snapshot_carries_current_token() {
    with_owner(|| {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, r#"{"id":1,"email":"a@b.com"}"#);
        let auth = AuthSession::new(storage);

        assert_eq!(auth.client().token(), None);
        auth.restore();
        assert_eq!(auth.client().token(), Some("abc"));
        auth.logout();
        assert_eq!(auth.client().token(), None);
    });
}
