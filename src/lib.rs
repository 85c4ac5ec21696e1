// GraphQL Gateway
// A single-endpoint HTTP front door for a GraphQL execution engine

//! # GraphQL Gateway Library
//!
//! This crate accepts JSON-encoded GraphQL requests on one HTTP path, validates
//! the envelope, hands the query to an execution engine and writes the engine's
//! result back as JSON.
//!
//! ## Request Pipeline
//!
//! ```text
//! HTTP request
//!        ↓ method + path
//! Route Dispatcher (api)      ← 404 / 405 / CORS preflight
//!        ↓ POST
//! Body Reader (api::body)     ← streams chunks into one text payload
//!        ↓ text
//! Request Decoder (api::decoder) ← content-type, JSON, `query` field
//!        ↓ GraphQLRequestBody
//! Executor Adapter (engine::executor) ← async-graphql schema
//!        ↓ JSON value
//! Response Writer             ← 200 JSON, or GatewayError as plain text
//! ```
//!
//! Every stage returns [`Result`]; the first [`GatewayError`] short-circuits
//! the pipeline and becomes the response.
//!
//! ## Rust Learning Notes:
//!
//! ### Re-exports
//! `pub use` statements create shortcuts so users don't need to know the internal
//! module structure. Instead of `use graphql_gateway::server::graphql::GatewayServerBuilder`,
//! users can write `use graphql_gateway::GatewayServerBuilder`.

// HTTP surface: routing, body reading, request decoding, handlers
pub mod api;

// Runtime configuration (defaults, config file, environment)
pub mod config;

// Execution engine adapter and the schema it serves
pub mod engine;

// tracing-subscriber setup for the binary
pub mod logging;

// Process lifecycle: bind and serve the router
pub mod server;

pub use api::{create_router, types::GraphQLRequestBody, GatewayState};
pub use config::{CorsConfig, GatewayConfig, ServerConfig};
pub use engine::{
    executor::QueryExecutor,
    graphql::{create_schema, GatewaySchema, RootValue},
};
pub use server::{GatewayServer, GatewayServerBuilder};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Classified failures of the request pipeline
///
/// Each variant maps to exactly one HTTP status. The `Display` text is what
/// gets logged; clients only ever see [`GatewayError::public_message`].
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The client sent a malformed envelope: wrong content-type,
    /// unparsable body or a missing `query` field
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    /// The body grew past the configured limit while streaming
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// The configured request deadline expired
    #[error("Request timed out")]
    RequestTimeout,

    /// Stream failures and anything else the client is not responsible for
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        GatewayError::BadRequest(reason.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short text written to the response body.
    ///
    /// Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        let reason = self
            .status_code()
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();
        match self {
            GatewayError::BadRequest(detail) => format!("{}: {}", reason, detail),
            _ => reason,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = ?self, "GraphQL request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "GraphQL request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain;charset=UTF-8")],
            format!("{}\n", self.public_message()),
        )
            .into_response()
    }
}

/// Type alias for Results that use the gateway error type
pub type Result<T> = std::result::Result<T, GatewayError>;
