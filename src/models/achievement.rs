use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::achievement::{self, Category};
use crate::error::AppError;

pub use super::shared::Pagination;
use super::shared::{double_option, require_text};

#[derive(Serialize, utoipa::ToSchema)]
pub struct AchievementResponse {
    pub id: i32,
    /// Stored category code.
    pub category: Category,
    /// Human-readable category label.
    pub category_label: &'static str,
    pub event_name: String,
    pub work_title: String,
    pub award: String,
    pub event_date: NaiveDate,
    pub certificate_image: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<achievement::Model> for AchievementResponse {
    fn from(m: achievement::Model) -> Self {
        Self {
            id: m.id,
            category: m.category,
            category_label: m.category.label(),
            event_name: m.event_name,
            work_title: m.work_title,
            award: m.award,
            event_date: m.event_date,
            certificate_image: m.certificate_image,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AchievementListResponse {
    pub data: Vec<AchievementResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateAchievementRequest {
    pub category: Category,
    pub event_name: String,
    pub work_title: String,
    pub award: String,
    pub event_date: NaiveDate,
    pub certificate_image: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct UpdateAchievementRequest {
    pub category: Option<Category>,
    pub event_name: Option<String>,
    pub work_title: Option<String>,
    pub award: Option<String>,
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub certificate_image: Option<Option<String>>,
    pub description: Option<String>,
}

pub fn validate_create_achievement(req: &CreateAchievementRequest) -> Result<(), AppError> {
    require_text("event_name", &req.event_name, 200)?;
    require_text("work_title", &req.work_title, 300)?;
    require_text("award", &req.award, 100)?;
    Ok(())
}

/// Row shape of the legacy `/api/achievements` feed. The category is
/// rendered as its display label and the date as an ISO string.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AchievementApi {
    pub id: i32,
    #[schema(example = "論文發表")]
    pub category: &'static str,
    pub event_name: String,
    pub work_title: String,
    pub award: String,
    #[schema(example = "2025-03-05")]
    pub event_date: String,
    pub description: String,
}

impl From<achievement::Model> for AchievementApi {
    fn from(m: achievement::Model) -> Self {
        Self {
            id: m.id,
            category: m.category.label(),
            event_name: m.event_name,
            work_title: m.work_title,
            award: m.award,
            event_date: m.event_date.format("%Y-%m-%d").to_string(),
            description: m.description,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AchievementsJson {
    pub achievements: Vec<AchievementApi>,
}
