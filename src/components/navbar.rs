//! Top navigation bar with session-aware actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthSession;

pub const BRAND: &str = "Flash Running";

/// Primary links, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/dashboard", "Dashboard")];

fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname.trim_end_matches('/') == href
}

fn greeting(name: &str) -> String {
    format!("Hello {name}")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let location = use_location();

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            let pathname = location.pathname;
            view! {
                <li>
                    <a
                        class="navbar__link"
                        class:navbar__link--active=move || is_active(&pathname.get(), href)
                        href=href
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                <span class="navbar__brand">{BRAND}</span>
                <ul class="navbar__links">{links}</ul>
                <div class="navbar__session">
                    {move || match auth.user() {
                        None => view! {
                            <a class="navbar__action" href="/login">"Log in"</a>
                            <a class="navbar__action" href="/register">"Sign up"</a>
                        }
                        .into_any(),
                        Some(user) => view! {
                            <span class="navbar__greeting">{greeting(user.display_name())}</span>
                            <button class="navbar__action btn" on:click=move |_| auth.logout()>
                                "Log out"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </nav>
        </header>
    }
}
