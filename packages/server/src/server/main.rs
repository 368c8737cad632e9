// Main entry point for the GraphQL gateway

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gateway_core::kernel::{
    AdsClient, CompaniesClient, GatewayDeps, IdentityAdapter, PaymentsClient, UsersClient,
};
use gateway_core::server::build_app;
use gateway_core::Config;
use identity::{IdentityClient, IdentityOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gateway_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AdMarket GraphQL gateway");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    // One shared connection pool for all delegate services
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")?;

    // The identity service lives behind the users service's base URL
    let identity_client = IdentityClient::new(
        IdentityOptions::new(config.users_url.clone()).with_timeout(timeout),
    )
    .context("Failed to create identity client")?;

    let deps = GatewayDeps::new(
        Arc::new(IdentityAdapter::new(Arc::new(identity_client))),
        Arc::new(UsersClient::new(config.users_url.clone(), http.clone())),
        Arc::new(PaymentsClient::new(config.payments_url.clone(), http.clone())),
        Arc::new(CompaniesClient::new(config.companies_url.clone(), http.clone())),
        Arc::new(AdsClient::new(config.ads_url.clone(), http)),
    );

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
