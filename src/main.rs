mod model;
mod server;

use dioxus_logger::tracing;

use crate::server::{config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(&config, db);

    let app = router::router()
        .with_state(state)
        .layer(startup::cors_layer());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
