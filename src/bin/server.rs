//! Climate API server binary.
//!
//! Opens the climate data file read-only, builds the router, and serves the
//! REST API.
//!
//! # Usage
//!
//! ```bash
//! # Serve the default data file (resources/hawaii.sqlite)
//! cargo run --bin climate-server
//!
//! # Point at another dataset
//! DATABASE_PATH=/data/hawaii.sqlite cargo run --bin climate-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_PATH`: Location of the SQLite data file
//! - `REPOSITORY_TYPE`: `sqlite` or `local` (default: sqlite)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use climate_api::db::RepositoryFactory;
use climate_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting climate API server");

    // The repository is created once here and handed to the HTTP state;
    // there is no process-global session.
    let repository = RepositoryFactory::from_default_config()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    info!("Repository initialized");

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
