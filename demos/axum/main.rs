mod cors;
mod routes;

use std::error::Error;
use std::net::SocketAddr;

use axum::{
    Router,
    routing::{delete, get},
};
use cors::middleware::cors_middleware;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let app_state = cors::build_state()?;

    // `layer` rather than `route_layer` so preflights reach the middleware
    // for paths that only register non-OPTIONS handlers.
    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/items/{id}", delete(routes::remove_item))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    info!(%addr, "axum demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
