use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Achievement category, stored as its short code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "competition")]
    Competition,
    #[sea_orm(string_value = "paper")]
    Paper,
    #[sea_orm(string_value = "award")]
    Award,
}

impl Category {
    /// Human-readable label shown on pages and in the legacy JSON feed.
    pub fn label(self) -> &'static str {
        match self {
            Category::Competition => "競賽",
            Category::Paper => "論文發表",
            Category::Award => "論文獲獎",
        }
    }

    /// Map a raw type label from the competition CSV onto a category.
    /// Unrecognized labels fall back to `Competition`.
    pub fn from_source_label(label: &str) -> Self {
        match label {
            "競賽" => Category::Competition,
            "論文發表" => Category::Paper,
            "論文獲獎" => Category::Award,
            _ => Category::Competition,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub category: Category,
    pub event_name: String,
    pub work_title: String,
    pub award: String,
    pub event_date: Date,
    pub certificate_image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
