use api_types::about::TeamMember;
use axum::{Json, extract::State};

use crate::server::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<TeamMember>> {
    let members = state
        .engine
        .team()
        .iter()
        .map(|member| TeamMember {
            first_name: member.first_name.to_string(),
            last_name: member.last_name.to_string(),
        })
        .collect();

    Json(members)
}
