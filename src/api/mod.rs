// GraphQL-over-HTTP API module
// Dispatches requests on the single GraphQL endpoint

//! # Route Dispatcher
//!
//! Every request lands in exactly one of four handlers:
//!
//! | method     | path          | outcome                        |
//! |------------|---------------|--------------------------------|
//! | any        | not endpoint  | 404 [`handlers::not_found`]    |
//! | `OPTIONS`  | endpoint      | 204 [`handlers::preflight`]    |
//! | `POST`     | endpoint      | [`handlers::graphql_handler`]  |
//! | other      | endpoint      | 405 [`handlers::method_not_allowed`] |

pub mod body;
pub mod decoder;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::engine::executor::QueryExecutor;
use handlers::{graphql_handler, method_not_allowed, not_found, preflight};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct GatewayState {
    pub executor: Arc<dyn QueryExecutor>,
    pub config: Arc<GatewayConfig>,
}

impl GatewayState {
    pub fn new(executor: Arc<dyn QueryExecutor>, config: GatewayConfig) -> Self {
        Self {
            executor,
            config: Arc::new(config),
        }
    }
}

/// Build the router for the configured endpoint path.
///
/// Fails when the configuration does not validate, so a bad endpoint path
/// never reaches axum's route parser.
pub fn create_router(state: GatewayState) -> anyhow::Result<Router> {
    state.config.validate()?;
    let endpoint = state.config.endpoint_path.clone();

    let router = Router::new()
        .route(
            &endpoint,
            post(graphql_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());
    Ok(router)
}
