use std::sync::Arc;

use cors_policy::{
    AllowedHeaders, AllowedMethods, Cors, CorsOptions, ExposedHeaders, Origin, ValidationError,
};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        origin: Origin::list(["https://app.example.com", "https://*.preview.example.com"]),
        methods: AllowedMethods::list(["GET", "POST", "DELETE"]),
        allowed_headers: AllowedHeaders::list(["Content-Type", "X-Example-Trace"]),
        exposed_headers: ExposedHeaders::list(["X-Example-Trace"]),
        credentials: true,
        max_age: Some(600),
        allow_private_network: true,
        ..CorsOptions::default()
    };

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
