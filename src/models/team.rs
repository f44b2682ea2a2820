use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::team_member;
use crate::error::AppError;

pub use super::shared::Pagination;
use super::shared::{double_option, require_text};

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamMemberResponse {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub description: String,
    pub photo: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<team_member::Model> for TeamMemberResponse {
    fn from(m: team_member::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            role: m.role,
            description: m.description,
            photo: m.photo,
            order: m.order,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamMemberListResponse {
    pub data: Vec<TeamMemberResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub description: String,
    pub photo: Option<String>,
    pub order: Option<i32>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo: Option<Option<String>>,
    pub order: Option<i32>,
}

pub fn validate_create_team_member(req: &CreateTeamMemberRequest) -> Result<(), AppError> {
    require_text("name", &req.name, 100)?;
    require_text("role", &req.role, 100)?;
    require_text("description", &req.description, 10_000)?;
    Ok(())
}

/// Row shape of the legacy `/api/team-members` feed.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamMemberApi {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub description: String,
    pub order: i32,
}

impl From<team_member::Model> for TeamMemberApi {
    fn from(m: team_member::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            role: m.role,
            description: m.description,
            order: m.order,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamMembersJson {
    pub members: Vec<TeamMemberApi>,
}
