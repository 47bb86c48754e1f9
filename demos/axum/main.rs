mod routes;
mod scrutiny;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use scrutiny::middleware::scrutiny_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app_state = scrutiny::build_state().expect("valid scrutiny configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/transfer", post(routes::transfer))
        .route("/hooks/github", post(routes::webhook))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            scrutiny_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
