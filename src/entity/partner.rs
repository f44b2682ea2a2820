use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Partner organization category, stored as its short code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    #[sea_orm(string_value = "university")]
    University,
    #[sea_orm(string_value = "school")]
    School,
    #[sea_orm(string_value = "company")]
    Company,
}

impl PartnerType {
    pub fn label(self) -> &'static str {
        match self {
            PartnerType::University => "大學院校",
            PartnerType::School => "中小學",
            PartnerType::Company => "企業",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub partner_type: PartnerType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website_url: String,
    /// Stored path of the partner logo, if one was uploaded.
    pub logo: Option<String>,
    pub order: i32,
    /// Only active partners ever appear on the public site.
    pub is_active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
