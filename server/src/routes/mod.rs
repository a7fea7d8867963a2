//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR app to `/`, serves the hydrate bundle and stylesheet
//! under `/pkg`, and exposes `/healthz` for liveness checks.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*`
/// environment overrides).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
