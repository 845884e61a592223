//! User API endpoints.

use api_types::user::{UserCreated, UserDetails, UserNew};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::NewUser;

use crate::{ServerError, server::ServerState};

pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<UserDetails>, ServerError> {
    let user = state.engine.user_details(&id).await?;

    Ok(Json(UserDetails {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        total: user.total,
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<UserNew>, JsonRejection>,
) -> Result<(StatusCode, Json<UserCreated>), ServerError> {
    let Json(payload) = payload?;

    let user = state
        .engine
        .create_user(NewUser {
            id: payload.id.map(|id| id.to_string()),
            first_name: payload.first_name,
            last_name: payload.last_name,
            birthday: payload.birthday,
            marital_status: payload.marital_status,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            birthday: user.birthday,
            marital_status: user.marital_status,
            total: user.total,
        }),
    ))
}
