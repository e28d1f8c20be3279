//! Pizza catalog: REST backend for restaurants, pizzas and the prices at which
//! restaurants offer them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod serializer;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{catalog_routes, common_routes, common_routes_with_ready, docs_routes, ApiDoc};
pub use service::CatalogService;
pub use state::AppState;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: catalog, common and docs routes, with request
/// tracing and a body size limit.
pub fn build_app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(catalog_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
