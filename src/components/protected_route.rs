//! Route guard for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page body. Anonymous visitors get nothing rendered and a single
//! history-replace redirect to `/login`; authenticated users get the children
//! untouched. Re-evaluates whenever the session token changes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show when=move || auth.is_authenticated()>
            {children()}
        </Show>
    }
}
