pub mod config;
pub mod error;
pub mod state;
pub mod tenancy;
pub mod auth;
pub mod db;
pub mod models;
pub mod middleware;
pub mod routes;
pub mod views;
pub mod invoice;
pub mod rate_limit;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::auth_redirect::redirect_unauthorized;
use crate::rate_limit::LoginRateLimiter;
use crate::state::{AppState, SharedState};
use crate::tenancy::TenantRegistry;

/// Build the shared application context: the tenant store registry, config
/// and the invoice font. The font is optional — without it everything but
/// the invoice route works.
pub fn build_state(config: Config) -> SharedState {
    let invoice_font = match std::fs::read(&config.font_path) {
        Ok(bytes) => {
            tracing::info!(path = %config.font_path.display(), "invoice font loaded");
            Some(Arc::new(bytes))
        }
        Err(e) => {
            tracing::warn!(
                path = %config.font_path.display(),
                "invoice font not available, invoice rendering disabled: {e}"
            );
            None
        }
    };

    Arc::new(AppState {
        tenants: TenantRegistry::new(config.data_dir.clone()),
        invoice_font,
        login_limiter: LoginRateLimiter::new(),
        config,
    })
}

pub fn build_app(state: SharedState) -> Router {
    Router::new()
        .merge(routes::auth_routes())
        .merge(routes::session_routes().layer(axum::middleware::from_fn(redirect_unauthorized)))
        .merge(views::view_routes().layer(axum::middleware::from_fn(redirect_unauthorized)))
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
