//! Strava connect and sync buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! OAuth with Strava is driven entirely by the server: `connect` asks for an
//! authorize URL and leaves the SPA, `sync` asks the server to pull recent
//! activities and reports the counts it returns. Neither retries.

#[cfg(test)]
#[path = "strava_test.rs"]
mod strava_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::StravaSyncResult;
use crate::state::auth::AuthSession;

pub const CONNECT_FAILED_MESSAGE: &str = "Strava authentication failed";
pub const NOT_LOGGED_IN_MESSAGE: &str = "You must be logged in.";
pub const SYNC_FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Outcome line shown under the sync button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncNotice {
    Success(String),
    Failure(String),
}

impl SyncNotice {
    pub fn from_result(result: &Result<StravaSyncResult, ApiError>) -> Self {
        match result {
            Ok(counts) => Self::Success(sync_success_message(*counts)),
            Err(e) => Self::Failure(sync_failure_message(e)),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

pub fn sync_success_message(counts: StravaSyncResult) -> String {
    format!("{} activities imported, {} updated.", counts.imported, counts.updated)
}

/// Server detail when present; a generic line otherwise.
pub fn sync_failure_message(error: &ApiError) -> String {
    error.detail().unwrap_or(SYNC_FALLBACK_MESSAGE).to_owned()
}

#[component]
pub fn StravaConnectButton() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let error = RwSignal::new(None::<&'static str>);
    let pending = RwSignal::new(false);

    let on_click = move |_| {
        if pending.get() || auth.token_untracked().is_none() {
            return;
        }
        pending.set(true);
        error.set(None);
        let client = auth.client();
        leptos::task::spawn_local(async move {
            match crate::net::api::strava_connect_url(&client).await {
                Ok(resp) => crate::util::browser::redirect_to(&resp.url),
                Err(e) => {
                    log::warn!("strava connect-url failed: {e}");
                    let _ = error.try_set(Some(CONNECT_FAILED_MESSAGE));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="strava">
            <button class="btn btn--strava" on:click=on_click disabled=move || pending.get()>
                "Connect Strava"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="strava__notice strava__notice--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn StravaSyncButton() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let notice = RwSignal::new(None::<SyncNotice>);
    let pending = RwSignal::new(false);

    let on_click = move |_| {
        if pending.get() {
            return;
        }
        if auth.token_untracked().is_none() {
            notice.set(Some(SyncNotice::Failure(NOT_LOGGED_IN_MESSAGE.to_owned())));
            return;
        }
        pending.set(true);
        notice.set(None);
        let client = auth.client();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::strava_sync(&client).await;
            if let Err(e) = &result {
                log::warn!("strava sync failed: {e}");
            }
            let _ = notice.try_set(Some(SyncNotice::from_result(&result)));
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="strava">
            <button class="btn" on:click=on_click disabled=move || pending.get()>
                {move || if pending.get() { "Syncing…" } else { "Sync with Strava" }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! {
                            <p class="strava__notice" class:strava__notice--error=n.is_failure()>
                                {n.text().to_owned()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
