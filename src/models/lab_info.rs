use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::lab_info::{self, LabInfoData};
use crate::error::AppError;

use super::shared::require_text;

#[derive(Serialize, utoipa::ToSchema)]
pub struct LabInfoResponse {
    pub id: i32,
    pub name: String,
    pub full_name: String,
    pub founded_date: NaiveDate,
    pub slogan: String,
    pub mission: String,
    pub email: String,
    pub github_url: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<lab_info::Model> for LabInfoResponse {
    fn from(m: lab_info::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            full_name: m.full_name,
            founded_date: m.founded_date,
            slogan: m.slogan,
            mission: m.mission,
            email: m.email,
            github_url: m.github_url,
            website_url: m.website_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateLabInfoRequest {
    pub name: String,
    pub full_name: String,
    pub founded_date: NaiveDate,
    pub slogan: String,
    pub mission: String,
    pub email: String,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct UpdateLabInfoRequest {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub founded_date: Option<NaiveDate>,
    pub slogan: Option<String>,
    pub mission: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
}

pub fn validate_create_lab_info(req: &CreateLabInfoRequest) -> Result<(), AppError> {
    require_text("name", &req.name, 100)?;
    require_text("full_name", &req.full_name, 200)?;
    require_text("slogan", &req.slogan, 300)?;
    require_text("mission", &req.mission, 10_000)?;
    require_text("email", &req.email, 254)?;
    Ok(())
}

impl From<CreateLabInfoRequest> for LabInfoData {
    fn from(req: CreateLabInfoRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            full_name: req.full_name.trim().to_string(),
            founded_date: req.founded_date,
            slogan: req.slogan.trim().to_string(),
            mission: req.mission.trim().to_string(),
            email: req.email.trim().to_string(),
            github_url: req.github_url.unwrap_or_default(),
            website_url: req.website_url.unwrap_or_default(),
        }
    }
}
