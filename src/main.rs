use std::path::PathBuf;

use api_rest::{router, AppState};
use collaboro_core::CoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Collaboro application
///
/// Resolves configuration from the environment once, loads and validates the
/// opportunity catalog, and serves the REST API (discovery read paths plus
/// the expression-of-interest write path) with Swagger UI.
///
/// # Environment Variables
/// - `COLLABORO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `COLLABORO_CATALOG_FILE`: Optional YAML catalog overriding the built-in seed
/// - `COLLABORO_SHOW_BUSINESS`: Set to "false" or "0" to hide business listings
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, catalog loading, or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("collaboro=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("COLLABORO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let catalog_file = std::env::var("COLLABORO_CATALOG_FILE").ok().map(PathBuf::from);
    let hide_business = matches!(
        std::env::var("COLLABORO_SHOW_BUSINESS").ok().as_deref(),
        Some("false") | Some("0")
    );

    let config = CoreConfig::new(catalog_file, hide_business);
    let state = AppState::from_config(&config)?;

    tracing::info!("++ Starting Collaboro REST on {}", rest_addr);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
