mod model;
mod server;

use std::{future::IntoFuture, sync::Arc};

use tokio::sync::Notify;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::token::TokenCodec,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let catalog = startup::load_catalog(&config)?;
    let tokens = TokenCodec::new(&config.jwt_secret);

    let app = router::app(
        AppState::new(db.clone(), catalog, tokens),
        config.http_limits,
    );

    let listener = tokio::net::TcpListener::bind(config.http_address).await?;

    tracing::info!(
        address = %config.http_address,
        environment = %config.environment,
        "Starting server"
    );

    let shutdown = Arc::new(Notify::new());
    let server_shutdown = shutdown.clone();
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.notified().await })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::InternalError(format!("Server task failed: {}", e)))??;
        }
        _ = startup::shutdown_signal() => {
            shutdown.notify_one();

            match tokio::time::timeout(config.shutdown_timeout, &mut server).await {
                Ok(result) => {
                    result.map_err(|e| AppError::InternalError(format!("Server task failed: {}", e)))??;
                }
                Err(_) => {
                    tracing::warn!(
                        "In-flight requests did not finish within {:?}, aborting",
                        config.shutdown_timeout
                    );
                    server.abort();
                }
            }
        }
    }

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
