//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). The workspace's main `collaboro-run` binary is
//! the deployment entry point.

use std::path::PathBuf;

use api_rest::{router, AppState};
use collaboro_core::CoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Collaboro REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) and serves the discovery and interest endpoints with
/// OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `COLLABORO_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `COLLABORO_CATALOG_FILE`: Optional YAML catalog overriding the built-in seed
/// - `COLLABORO_SHOW_BUSINESS`: Set to "false" or "0" to hide business listings
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured catalog fails to load or validate,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("collaboro_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("COLLABORO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Collaboro REST API on {}", addr);

    let catalog_file = std::env::var("COLLABORO_CATALOG_FILE").ok().map(PathBuf::from);
    let hide_business = matches!(
        std::env::var("COLLABORO_SHOW_BUSINESS").ok().as_deref(),
        Some("false") | Some("0")
    );

    let config = CoreConfig::new(catalog_file, hide_business);
    let state = AppState::from_config(&config)?;

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
