//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, new_plan::NewPlanPage,
    plan_detail::PlanDetailPage, register::RegisterPage,
};
use crate::state::auth::AuthSession;
use crate::state::session::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single `AuthSession` and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthSession::new(LocalStorage);
    provide_context(auth);

    // Effects only run in the browser, after hydration, so the server render
    // and the first client render agree on an anonymous session.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/flash-running.css"/>
        <Title text="Flash Running"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("plans"), StaticSegment("new")) view=NewPlanPage/>
                    <Route path=(StaticSegment("plans"), ParamSegment("id")) view=PlanDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
