use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use std::sync::Arc;

use api_types::ErrorBody;
use engine::Engine;

use crate::{about, costs, reports, users};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
}

fn router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/add", post(costs::add))
        .route("/report", get(reports::get))
        .route("/users/{id}", get(users::details))
        .route("/adduser", post(users::create))
        .route("/about", get(about::list))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

/// Build the HTTP application around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
