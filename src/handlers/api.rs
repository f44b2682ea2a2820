//! Legacy JSON feeds consumed by the site's front-end scripts.

use axum::{Json, extract::State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{achievement, team_member};
use crate::error::AppError;
use crate::models::achievement::AchievementsJson;
use crate::models::team::TeamMembersJson;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/achievements",
    tag = "Data",
    operation_id = "achievementsJson",
    summary = "Achievement feed",
    description = "All achievements ordered by event date descending. Categories are rendered as display labels and dates as ISO `YYYY-MM-DD` strings.",
    responses(
        (status = 200, description = "Achievement feed", body = AchievementsJson),
    ),
)]
#[instrument(skip(state))]
pub async fn achievements_json(
    State(state): State<AppState>,
) -> Result<Json<AchievementsJson>, AppError> {
    let achievements = achievement::Entity::find()
        .order_by_desc(achievement::Column::EventDate)
        .all(&state.db)
        .await?;

    Ok(Json(AchievementsJson {
        achievements: achievements.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/team-members",
    tag = "Data",
    operation_id = "teamMembersJson",
    summary = "Team member feed",
    description = "All team members ordered by display order, then name.",
    responses(
        (status = 200, description = "Team member feed", body = TeamMembersJson),
    ),
)]
#[instrument(skip(state))]
pub async fn team_members_json(
    State(state): State<AppState>,
) -> Result<Json<TeamMembersJson>, AppError> {
    let members = team_member::Entity::find()
        .order_by_asc(team_member::Column::Order)
        .order_by_asc(team_member::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(TeamMembersJson {
        members: members.into_iter().map(Into::into).collect(),
    }))
}
