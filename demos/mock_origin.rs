//! A pretend articles origin for poking the edge by hand.
//!
//! Run with `cargo run --example mock_origin`, point the edge's upstream
//! origin at `http://127.0.0.1:9200`, then request `/article/hello`
//! (or `/article/old-hello` to watch a redirect get swallowed).

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;

async fn article(Path(slug): Path<String>) -> impl IntoResponse {
    match slug.as_str() {
        "hello" => Html("<h1>Hello from the pretend origin! 🎈</h1>").into_response(),
        "old-hello" => Redirect::permanent("/article/hello").into_response(),
        _ => (StatusCode::NOT_FOUND, "no such article").into_response(),
    }
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/article/{slug}", get(article));

    let addr = SocketAddr::from(([127, 0, 0, 1], 9200));
    println!("Pretend articles origin listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
