//! Session record and its durable mirror.
//!
//! DESIGN
//! ======
//! `Session` keeps token and user behind private fields so they can only be
//! set or cleared as a pair. `SessionStore` owns a `Session` plus a
//! `SessionStorage` backend and writes the durable copy on every transition,
//! which keeps this layer testable without a reactive runtime.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::{AuthResponse, User};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user.
pub const USER_KEY: &str = "user";

/// Which side of the two-state auth machine the session is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    Authenticated,
}

/// The client-held token and user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: String, user: User) -> Self {
        Self { token: Some(token), user: Some(user) }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        if self.token.is_some() { SessionStatus::Authenticated } else { SessionStatus::Anonymous }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self::authenticated(resp.access_token, resp.user)
    }
}

/// Durable string key/value storage.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. A no-op outside the hydrate build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local storage; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// A `Session` with write-through persistence.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    restored: bool,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Anonymous store that has not looked at storage yet.
    pub fn new(storage: S) -> Self {
        Self { session: Session::anonymous(), restored: false, storage }
    }

    /// Store initialised from whatever the storage already holds.
    #[cfg(test)]
    pub fn restored(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Whether the durable copy has been read yet.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Load the persisted token and user.
    ///
    /// Both entries must be present and the user must parse; otherwise the
    /// session stays anonymous and any stray entry is removed.
    pub fn restore(&mut self) {
        let token = self.storage.get(TOKEN_KEY);
        let user_raw = self.storage.get(USER_KEY);
        let user = user_raw.as_deref().and_then(|raw| serde_json::from_str::<User>(raw).ok());

        self.session = match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Session::authenticated(token, user),
            (token, _) => {
                if token.is_some() || user_raw.is_some() {
                    log::warn!("discarding incomplete persisted session");
                    self.clear_persisted();
                }
                Session::anonymous()
            }
        };
        self.restored = true;
    }

    /// Anonymous -> Authenticated. Sets token and user together and persists both.
    pub fn sign_in(&mut self, session: Session) {
        let (Some(token), Some(user)) = (session.token(), session.user()) else {
            self.sign_out();
            return;
        };
        match serde_json::to_string(user) {
            Ok(raw) => {
                self.storage.set(TOKEN_KEY, token);
                self.storage.set(USER_KEY, &raw);
            }
            Err(e) => log::error!("failed to serialize user for storage: {e}"),
        }
        self.session = session;
        self.restored = true;
    }

    /// Authenticated -> Anonymous. Clears memory and both persisted entries.
    pub fn sign_out(&mut self) {
        self.session = Session::anonymous();
        self.clear_persisted();
        self.restored = true;
    }

    fn clear_persisted(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
