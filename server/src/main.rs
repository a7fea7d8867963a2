mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "mapnotes server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "mapnotes listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
