//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes must apply identical unauthenticated redirect behavior:
//! wait until the stored session has been restored, then send anonymous
//! visitors to `/login` with a history replace, once per anonymous episode.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthSession;
use crate::state::session::SessionStorage;

pub const LOGIN_ROUTE: &str = "/login";

/// Decide whether an anonymous visitor should be bounced to login.
pub fn should_redirect_unauth(restored: bool, authenticated: bool) -> bool {
    restored && !authenticated
}

/// Suppresses repeat redirects while the session stays anonymous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectGate {
    fired: bool,
}

impl RedirectGate {
    /// Feed the current session flags; returns `true` when a redirect should
    /// be issued now.
    pub fn observe(&mut self, restored: bool, authenticated: bool) -> bool {
        if authenticated {
            self.fired = false;
            return false;
        }
        if self.fired || !should_redirect_unauth(restored, authenticated) {
            return false;
        }
        self.fired = true;
        true
    }
}

pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// One evaluation of the guard: read the session flags, feed the gate, and
/// navigate if it fires. Returns whether a redirect was issued.
pub fn step_unauth_redirect<S, F>(gate: &mut RedirectGate, auth: AuthSession<S>, navigate: &F) -> bool
where
    S: SessionStorage + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions),
{
    let restored = auth.is_restored();
    let authenticated = auth.is_authenticated();
    if !gate.observe(restored, authenticated) {
        return false;
    }
    log::debug!("no session, redirecting to {LOGIN_ROUTE}");
    navigate(LOGIN_ROUTE, replace_options());
    true
}

/// Redirect to `/login` whenever the session is restored and anonymous.
pub fn install_unauth_redirect<S, F>(auth: AuthSession<S>, navigate: F)
where
    S: SessionStorage + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut gate = RedirectGate::default();
    Effect::new(move || {
        step_unauth_redirect(&mut gate, auth, &navigate);
    });
}
