use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::scrutiny::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Send a request with a foreign Origin to see it rejected.</p>",
        state.greeting
    ))
}

pub async fn transfer() -> impl IntoResponse {
    "transfer accepted"
}

pub async fn webhook() -> impl IntoResponse {
    "webhook received"
}
