//! Plan creation page.

use leptos::prelude::*;

use crate::components::create_plan_form::CreatePlanForm;
use crate::components::protected_route::ProtectedRoute;

#[component]
pub fn NewPlanPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <section class="new-plan-page">
                <h1>"Create a plan"</h1>
                <CreatePlanForm/>
            </section>
        </ProtectedRoute>
    }
}
