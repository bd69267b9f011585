//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Welcome to Flash Running!"</h1>
            <p class="home-page__tagline">"Create, manage and follow your personalised training plans."</p>
            <a class="btn btn--primary" href="/dashboard">"Go to dashboard"</a>
        </section>
    }
}
