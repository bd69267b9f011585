//! Plan creation form.
//!
//! DESIGN
//! ======
//! The server has exposed two creation contracts: a free-text prompt sent to
//! `/plans/generate` and an explicit name/goal sent to `/plans`. The form
//! offers both, defaulting to the prompt flow, and maps whichever is active
//! to a `PlanRequest`.

#[cfg(test)]
#[path = "create_plan_form_test.rs"]
mod create_plan_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::PlanRequest;
use crate::state::auth::AuthSession;

pub const SUCCESS_ROUTE: &str = "/dashboard";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanFormMode {
    #[default]
    Generate,
    Manual,
}

/// Validate the active fields and build the request for the current mode.
fn build_plan_request(mode: PlanFormMode, prompt: &str, name: &str, goal: &str) -> Result<PlanRequest, &'static str> {
    match mode {
        PlanFormMode::Generate => {
            let prompt = prompt.trim();
            if prompt.is_empty() {
                return Err("Describe your goal first.");
            }
            Ok(PlanRequest::Generate { prompt: prompt.to_owned() })
        }
        PlanFormMode::Manual => {
            let name = name.trim();
            if name.is_empty() {
                return Err("Give your plan a name.");
            }
            Ok(PlanRequest::Manual { name: name.to_owned(), goal: goal.trim().to_owned() })
        }
    }
}

fn submit_label(pending: bool) -> &'static str {
    if pending { "Working…" } else { "Create" }
}

#[component]
pub fn CreatePlanForm() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let navigate = use_navigate();

    let mode = RwSignal::new(PlanFormMode::default());
    let prompt = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let request = match build_plan_request(mode.get(), &prompt.get(), &name.get(), &goal.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        pending.set(true);

        let client = auth.client();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_plan(&client, &request).await {
                Ok(_) => navigate(SUCCESS_ROUTE, NavigateOptions::default()),
                Err(e) => {
                    log::warn!("plan creation failed: {e}");
                    let _ = error.try_set(Some(e.user_message()));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <form class="plan-form" on:submit=on_submit>
            <div class="plan-form__modes" role="tablist">
                <button
                    type="button"
                    class="plan-form__mode"
                    class:plan-form__mode--active=move || mode.get() == PlanFormMode::Generate
                    on:click=move |_| mode.set(PlanFormMode::Generate)
                >
                    "Describe it"
                </button>
                <button
                    type="button"
                    class="plan-form__mode"
                    class:plan-form__mode--active=move || mode.get() == PlanFormMode::Manual
                    on:click=move |_| mode.set(PlanFormMode::Manual)
                >
                    "Fill it in"
                </button>
            </div>
            <Show
                when=move || mode.get() == PlanFormMode::Generate
                fallback=move || {
                    view! {
                        <label class="plan-form__label">
                            "Plan name"
                            <input
                                class="plan-form__input"
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="plan-form__label">
                            "Goal"
                            <input
                                class="plan-form__input"
                                type="text"
                                placeholder="Sub-50 10k"
                                prop:value=move || goal.get()
                                on:input=move |ev| goal.set(event_target_value(&ev))
                            />
                        </label>
                    }
                }
            >
                <label class="plan-form__label" for="prompt">
                    "Describe your goal"
                </label>
                <textarea
                    id="prompt"
                    class="plan-form__input plan-form__input--prompt"
                    required
                    placeholder="A plan for my first marathon in 16 weeks, three sessions a week."
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                ></textarea>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="plan-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                {move || submit_label(pending.get())}
            </button>
        </form>
    }
}
