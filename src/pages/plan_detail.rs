//! Single-plan page.
//!
//! The API has no single-plan read yet, so this only echoes the route id.

#[cfg(test)]
#[path = "plan_detail_test.rs"]
mod plan_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::protected_route::ProtectedRoute;

fn plan_heading(id: Option<&str>) -> Option<String> {
    let id = id.map(str::trim).filter(|id| !id.is_empty())?;
    Some(format!("Plan #{id}"))
}

#[component]
pub fn PlanDetailPage() -> impl IntoView {
    let params = use_params_map();
    let heading = move || params.with(|p| plan_heading(p.get("id").as_deref()));

    view! {
        <ProtectedRoute>
            <section class="plan-detail-page">
                {move || match heading() {
                    Some(title) => view! {
                        <h1>{title}</h1>
                        <p class="plan-detail-page__placeholder">"Plan details are coming soon."</p>
                    }
                    .into_any(),
                    None => view! { <p>"Plan not found."</p> }.into_any(),
                }}
                <a href="/dashboard">"Back to dashboard"</a>
            </section>
        </ProtectedRoute>
    }
}
