use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::news;
use crate::error::AppError;

pub use super::shared::Pagination;
use super::shared::require_text;

#[derive(Serialize, utoipa::ToSchema)]
pub struct NewsResponse {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<news::Model> for NewsResponse {
    fn from(m: news::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            date: m.date,
            content: m.content,
            is_published: m.is_published,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct NewsListResponse {
    pub data: Vec<NewsResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateNewsRequest {
    pub title: String,
    pub date: NaiveDate,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

pub fn validate_create_news(req: &CreateNewsRequest) -> Result<(), AppError> {
    require_text("title", &req.title, 200)?;
    Ok(())
}
