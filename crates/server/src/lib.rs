use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use api_types::ErrorBody;
pub use server::{ServerState, app, run_with_listener};

mod about;
mod costs;
mod reports;
mod server;
mod users;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Request could not be decoded.
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    if err.is_validation() {
        return StatusCode::BAD_REQUEST;
    }

    match err {
        EngineError::UserNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        tracing::warn!("rejected body: {}", value.body_text());
        Self::Generic("Malformed request body".to_string())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        tracing::warn!("rejected query: {}", value.body_text());
        Self::Generic("Malformed query string".to_string())
    }
}
