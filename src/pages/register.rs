//! Registration page: email + name + password against `POST /register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::AFTER_LOGIN_ROUTE;
use crate::state::auth::AuthSession;

/// The server rejects shorter passwords.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Registration {
    email: String,
    name: Option<String>,
    password: String,
}

fn validate_registration(email: &str, name: &str, password: &str) -> Result<Registration, &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and a password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    let name = (!name.is_empty()).then(|| name.to_owned());
    Ok(Registration { email: email.to_owned(), name, password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&email.get(), &name.get(), &password.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let Registration { email, name, password } = registration;
            match auth.register(&email, name.as_deref(), &password).await {
                Ok(()) => navigate(AFTER_LOGIN_ROUTE, NavigateOptions::default()),
                Err(e) => {
                    let _ = info.try_set(format!("Sign-up failed: {}", e.user_message()));
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name (optional)"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
