// Gateway Engine
// The execution side of the gateway: schema and the adapter that runs queries

//! # Gateway Engine Module
//!
//! The HTTP layer never talks to async-graphql directly. It hands a decoded
//! [`GraphQLRequestBody`](crate::api::types::GraphQLRequestBody) to a
//! [`QueryExecutor`](executor::QueryExecutor) and writes back whatever JSON
//! comes out.
//!
//! ## Engine Components
//!
//! ### Executor Adapter (`executor` module)
//! - `QueryExecutor` trait, the seam between HTTP and execution
//! - Implemented for every `async_graphql::Schema`
//!
//! ### Schema (`graphql` module)
//! - The queryable type graph and its root value
//! - Built once at startup, shared read-only by all requests

/// Executor adapter over the GraphQL engine
pub mod executor;

/// Schema definition and construction
pub mod graphql;

pub use executor::QueryExecutor;
pub use graphql::{create_schema, GatewaySchema, RootValue};
