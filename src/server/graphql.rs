// GraphQL gateway server
// Binds the configured address and serves the dispatcher router

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{Router, Server};
use tracing::info;

use crate::api::{create_router, GatewayState};
use crate::config::GatewayConfig;
use crate::engine::{
    executor::QueryExecutor,
    graphql::{create_schema, RootValue},
};

/// GraphQL gateway server
pub struct GatewayServer {
    config: GatewayConfig,
    executor: Arc<dyn QueryExecutor>,
}

impl GatewayServer {
    pub fn new(config: GatewayConfig, executor: Arc<dyn QueryExecutor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The dispatcher router for this server's endpoint
    pub fn router(&self) -> anyhow::Result<Router> {
        create_router(GatewayState::new(self.executor.clone(), self.config.clone()))
    }

    /// Resolve the listen address; `localhost` and other names go through DNS
    async fn resolve_addr(&self) -> anyhow::Result<SocketAddr> {
        let host = self.config.server.host.as_str();
        let port = self.config.server.port;
        tokio::net::lookup_host((host, port))
            .await
            .with_context(|| format!("failed to resolve {}:{}", host, port))?
            .next()
            .with_context(|| format!("no address found for {}:{}", host, port))
    }

    /// Serve until ctrl-c
    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router()?;
        let addr = self.resolve_addr().await?;

        info!("Start GraphQL server {}", self.config.endpoint_url());
        info!(
            max_body_bytes = self.config.max_body_bytes,
            request_timeout_secs = ?self.config.request_timeout_secs,
            "Listening on {}",
            addr
        );

        Server::try_bind(&addr)
            .with_context(|| format!("failed to bind {}", addr))?
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("GraphQL server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

/// Builder for [`GatewayServer`]
///
/// Without an explicit executor the built-in schema with the default
/// root value is served.
pub struct GatewayServerBuilder {
    config: GatewayConfig,
    executor: Option<Arc<dyn QueryExecutor>>,
}

impl GatewayServerBuilder {
    pub fn new() -> Self {
        Self {
            config: GatewayConfig::default(),
            executor: None,
        }
    }

    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.config.endpoint_path = path.into();
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn QueryExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> GatewayServer {
        let executor: Arc<dyn QueryExecutor> = match self.executor {
            Some(executor) => executor,
            None => Arc::new(create_schema(RootValue::default())),
        };
        GatewayServer::new(self.config, executor)
    }

    pub async fn build_and_run(self) -> anyhow::Result<()> {
        self.build().run().await
    }
}

impl Default for GatewayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
