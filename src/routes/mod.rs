//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON/health endpoints, the static asset
//! directories, and Leptos SSR rendering under a single Axum router.

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use client::app::{App, shell};
use client::state::site::SiteData;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON and health endpoints.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/site", get(site_data))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + `/pkg` and `/images` assets.
pub fn app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list({
        let data = state.data.clone();
        move || {
            let data = SiteData::clone(&data);
            view! { <App data/> }
        }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let data = state.data.clone();
            move || shell(opts.clone(), SiteData::clone(&data))
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(&*leptos_options.site_root);
    let images_dir = state.static_dir.join("images");

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join(&*leptos_options.site_pkg_dir)))
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn site_data(State(state): State<AppState>) -> Json<SiteData> {
    Json(SiteData::clone(&state.data))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
