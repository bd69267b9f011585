//! Plan list for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `GET /plans` once per mount with the session token held at that
//! moment. A response that lands after the view is gone is dropped by the
//! disposed signal.

#[cfg(test)]
#[path = "plans_list_test.rs"]
mod plans_list_test;

use leptos::prelude::*;

use crate::net::types::TrainingPlan;
use crate::state::auth::AuthSession;
use crate::state::plans::{PlansState, PlansView};

pub const EMPTY_MESSAGE: &str = "No plans found.";

fn date_range(plan: &TrainingPlan) -> Option<String> {
    match (plan.start_date.as_deref(), plan.end_date.as_deref()) {
        (Some(start), Some(end)) => Some(format!("{start} → {end}")),
        (Some(start), None) => Some(format!("from {start}")),
        (None, Some(end)) => Some(format!("until {end}")),
        (None, None) => None,
    }
}

fn session_count_label(count: usize) -> String {
    if count == 1 { "1 session".to_owned() } else { format!("{count} sessions") }
}

/// Text shown in place of the list, if any.
fn status_text(view: PlansView<'_>) -> Option<String> {
    match view {
        PlansView::Loading => Some("Loading…".to_owned()),
        PlansView::Error(message) => Some(format!("Error: {message}")),
        PlansView::Empty => Some(EMPTY_MESSAGE.to_owned()),
        PlansView::List(_) => None,
    }
}

fn render_state(view: PlansView<'_>) -> AnyView {
    match view {
        PlansView::List(plans) => view! {
            <ul class="plans-list__grid">
                {plans.iter().cloned().map(|plan| view! { <PlanCard plan=plan/> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        other => {
            let class = if matches!(other, PlansView::Error(_)) { "plans-list__error" } else { "plans-list__status" };
            view! { <p class=class>{status_text(other)}</p> }.into_any()
        }
    }
}

#[component]
pub fn PlansList() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = RwSignal::new(PlansState::Loading);

    #[cfg(feature = "hydrate")]
    {
        let client = auth.client();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_plans(&client).await;
            if let Err(e) = &result {
                log::warn!("loading plans failed: {e}");
            }
            let _ = state.try_set(PlansState::from_result(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <div class="plans-list">
            {move || state.with(|s| render_state(s.view()))}
        </div>
    }
}

#[component]
fn PlanCard(plan: TrainingPlan) -> impl IntoView {
    let href = plan.href();
    let dates = date_range(&plan);
    let sessions = session_count_label(plan.sessions.len());

    view! {
        <li class="plan-card">
            <a class="plan-card__link" href=href>
                <h3 class="plan-card__name">{plan.name}</h3>
                <p class="plan-card__goal">{plan.goal.unwrap_or_default()}</p>
                <p class="plan-card__meta">
                    {dates.map(|d| view! { <span class="plan-card__dates">{d}</span> })}
                    <span class="plan-card__sessions">{sessions}</span>
                </p>
            </a>
        </li>
    }
}
