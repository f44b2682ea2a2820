use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::partner::{self, PartnerType};
use crate::error::AppError;

pub use super::shared::Pagination;
use super::shared::{double_option, require_text};

#[derive(Serialize, utoipa::ToSchema)]
pub struct PartnerResponse {
    pub id: i32,
    pub name: String,
    /// Stored partner type code.
    pub partner_type: PartnerType,
    /// Human-readable partner type label.
    pub partner_type_label: &'static str,
    pub description: String,
    pub website_url: String,
    pub logo: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<partner::Model> for PartnerResponse {
    fn from(m: partner::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            partner_type: m.partner_type,
            partner_type_label: m.partner_type.label(),
            description: m.description,
            website_url: m.website_url,
            logo: m.logo,
            order: m.order,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PartnerListResponse {
    pub data: Vec<PartnerResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePartnerRequest {
    pub name: String,
    pub partner_type: PartnerType,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub logo: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct UpdatePartnerRequest {
    pub name: Option<String>,
    pub partner_type: Option<PartnerType>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

pub fn validate_create_partner(req: &CreatePartnerRequest) -> Result<(), AppError> {
    require_text("name", &req.name, 200)?;
    Ok(())
}
