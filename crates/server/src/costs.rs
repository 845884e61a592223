//! Cost API endpoints.

use api_types::cost::{CostNew, CostView, Timestamp, UserId};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{CreatedAt, NewCost};

use crate::{ServerError, server::ServerState};

fn map_created_at(raw: Timestamp) -> CreatedAt {
    match raw {
        Timestamp::Millis(millis) => CreatedAt::Millis(millis),
        Timestamp::Text(text) => CreatedAt::Text(text),
        Timestamp::Other(value) => CreatedAt::Other(value.to_string()),
    }
}

fn map_cost(cost: engine::Cost, submitted: Option<UserId>) -> CostView {
    // Integer ids are echoed as integers, text ids in their trimmed form.
    let userid = match submitted {
        Some(UserId::Number(n)) => UserId::Number(n),
        _ => UserId::Text(cost.user_id),
    };

    CostView {
        id: cost.id,
        description: cost.description,
        category: cost.category.as_str().to_string(),
        sum: cost.sum,
        userid,
        created_at: cost.created_at,
    }
}

pub async fn add(
    State(state): State<ServerState>,
    payload: Result<Json<CostNew>, JsonRejection>,
) -> Result<(StatusCode, Json<CostView>), ServerError> {
    let Json(payload) = payload?;
    let submitted = payload.userid.clone();

    let cost = state
        .engine
        .add_cost(NewCost {
            description: payload.description,
            category: payload.category,
            sum: payload.sum,
            user_id: payload.userid.map(|id| id.to_string()),
            created_at: payload.created_at.map(map_created_at),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_cost(cost, submitted))))
}
