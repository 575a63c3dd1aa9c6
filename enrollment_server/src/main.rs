//! Enrollment server: reads config from the environment, creates the students
//! table if needed, and serves the enrollment and common routes.
//!
//! Run from repo root: `cargo run -p enrollment-server`

use enrollment_service::{
    app, connect, ensure_student_table, init_tracing, load_dotenv, AppState, ServiceConfig,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_file = load_dotenv();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    let config = ServiceConfig::load()?;

    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_student_table(&pool).await?;

    let router = app(AppState::new(pool), config.body_limit);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("enrollment server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl-c, shutting down");
}
