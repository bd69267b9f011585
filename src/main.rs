//! SSR server: renders the app shell and serves the hydrate bundle.
//!
//! The plan API is a separate service; this binary only hosts the frontend.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use flash_running::app::{App, shell};
    use flash_running::config;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::trace::TraceLayer;

    tracing_subscriber::fmt::init();

    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration missing or malformed");
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let mut addr = leptos_options.site_addr;
    if let Some(port) = config::parse_port(std::env::var("PORT").ok().as_deref()) {
        addr.set_port(port);
    }

    let routes = generate_route_list(App);
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, api = config::api_base_url(), "flash-running listening");
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %e, "server failed");
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {}
