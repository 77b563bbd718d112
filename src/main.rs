use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tower_http::trace::TraceLayer;

use steeple::{
    config::AppConfig, db::connection, logging::init_tracing, routes::router, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.log_level);

    let db = connection::connect(&cfg).await?;
    let state = AppState::new(cfg, db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", state.config.host.as_str(), state.config.port)
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid host/port: {err}"))?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
