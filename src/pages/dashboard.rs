//! Dashboard page listing the user's plans with Strava actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Everything below the guard mounts only
//! once a session is present, so the plan fetch always carries a token.

use leptos::prelude::*;

use crate::components::plans_list::PlansList;
use crate::components::protected_route::ProtectedRoute;
use crate::components::strava::{StravaConnectButton, StravaSyncButton};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <section class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <span class="dashboard-page__spacer"></span>
                    <StravaConnectButton/>
                    <StravaSyncButton/>
                    <a class="btn btn--primary" href="/plans/new">"+ Create a plan"</a>
                </header>
                <PlansList/>
            </section>
        </ProtectedRoute>
    }
}
