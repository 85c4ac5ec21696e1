// GraphQL Gateway Server
// Process lifecycle for the gateway: resolve, bind, serve, shut down

//! # Gateway Server Module
//!
//! The server layer sits on top of the API layer and owns nothing but the
//! listening socket:
//! ```text
//! Client
//!        ↓ HTTP
//! Server Layer (this module) ← bind, serve, graceful shutdown
//!        ↓ Router
//! API Layer ← dispatch, body, decoding, responses
//!        ↓ QueryExecutor
//! Engine Layer ← async-graphql schema
//! ```

/// Axum-based HTTP server for the GraphQL endpoint
pub mod graphql;

pub use graphql::{GatewayServer, GatewayServerBuilder};
