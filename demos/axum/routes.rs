use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from an allowed origin to see the CORS headers.</p>",
        state.greeting
    ))
}

pub async fn remove_item() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
