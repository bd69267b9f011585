//! Browser navigation outside the router.
//!
//! External URLs (Strava OAuth) must leave the SPA, so they go through
//! `window.location` instead of `leptos_router`. SSR paths no-op.

/// Point the whole page at `url`.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("failed to navigate to {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
