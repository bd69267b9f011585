//! Auth-session handle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `AuthSession` and provides it through context; route
//! guards, the navbar and every page that calls the API read it from there.
//! It is the only writer of the session: login, register, logout, and the
//! one-time restore from `localStorage` after hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{LocalStorage, Session, SessionStatus, SessionStorage, SessionStore};
use crate::net::api;
use crate::net::client::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};

/// Reactive, copyable session handle.
pub struct AuthSession<S = LocalStorage> {
    store: RwSignal<SessionStore<S>>,
}

impl<S> Clone for AuthSession<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for AuthSession<S> {}

impl<S> AuthSession<S>
where
    S: SessionStorage + Send + Sync + 'static,
{
    /// Anonymous, not-yet-restored session over `storage`.
    pub fn new(storage: S) -> Self {
        Self { store: RwSignal::new(SessionStore::new(storage)) }
    }

    /// Read the durable copy into memory. Call once, client-side.
    pub fn restore(self) {
        self.store.update(SessionStore::restore);
    }

    pub fn token(self) -> Option<String> {
        self.store.with(|s| s.token().map(str::to_owned))
    }

    pub fn token_untracked(self) -> Option<String> {
        self.store.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn user(self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn session_untracked(self) -> Session {
        self.store.with_untracked(|s| s.session().clone())
    }

    pub fn status(self) -> SessionStatus {
        self.store.with(SessionStore::status)
    }

    pub fn is_authenticated(self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn is_restored(self) -> bool {
        self.store.with(SessionStore::is_restored)
    }

    /// Browser API client carrying the token held right now.
    pub fn client(self) -> ApiClient {
        ApiClient::browser(self.token_untracked())
    }

    /// Log in through `client`; the session is untouched on failure.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from `POST /login`.
    pub async fn login_with<T: Transport>(self, client: &ApiClient<T>, email: &str, password: &str) -> Result<(), ApiError> {
        let resp = api::login(client, email, password).await?;
        self.establish(resp);
        Ok(())
    }

    /// Register through `client`; the session is untouched on failure.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from `POST /register`.
    pub async fn register_with<T: Transport>(
        self,
        client: &ApiClient<T>,
        email: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<(), ApiError> {
        let resp = api::register(client, email, name, password).await?;
        self.establish(resp);
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates the [`ApiError`] from `POST /login`.
    pub async fn login(self, email: &str, password: &str) -> Result<(), ApiError> {
        self.login_with(&self.client(), email, password).await
    }

    /// # Errors
    ///
    /// Propagates the [`ApiError`] from `POST /register`.
    pub async fn register(self, email: &str, name: Option<&str>, password: &str) -> Result<(), ApiError> {
        self.register_with(&self.client(), email, name, password).await
    }

    /// Drop token and user. No server call.
    pub fn logout(self) {
        log::info!("logging out");
        self.store.update(SessionStore::sign_out);
    }

    fn establish(self, resp: AuthResponse) {
        log::info!("signed in as user {}", resp.user.id);
        // The owning view may be gone by the time the response lands.
        let _ = self.store.try_update(|s| s.sign_in(Session::from(resp)));
    }
}
