use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mentorlink::{config::Config, services::AssociationService, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting with {:?} store, {:?} error responses, strict mentor references: {}",
        config.store_backend, config.error_response_mode, config.strict_mentor_references
    );

    let store = mentorlink::store::connect(&config).await?;
    let associations = AssociationService::new(store)
        .with_strict_references(config.strict_mentor_references);

    let state = Arc::new(AppState {
        associations,
        config: config.clone(),
    });
    let app = mentorlink::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server is running on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
