use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// Lab identity record. At most one row may ever exist; see [`save`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lab_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub full_name: String,
    pub founded_date: Date,
    pub slogan: String,
    #[sea_orm(column_type = "Text")]
    pub mission: String,
    pub email: String,
    pub github_url: String,
    pub website_url: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Mutable fields of the lab info record.
#[derive(Clone, Debug)]
pub struct LabInfoData {
    pub name: String,
    pub full_name: String,
    pub founded_date: Date,
    pub slogan: String,
    pub mission: String,
    pub email: String,
    pub github_url: String,
    pub website_url: String,
}

/// Persist lab info under the singleton discipline.
///
/// When no row exists, inserts one. When a row already exists, the attempted
/// create collapses into an in-place update of that row: every mutable field
/// is overwritten and the existing row is returned. A second row is never
/// persisted.
pub async fn save<C: ConnectionTrait>(db: &C, data: LabInfoData) -> Result<Model, DbErr> {
    let now = chrono::Utc::now();

    match Entity::find().one(db).await? {
        Some(existing) => {
            let mut active: ActiveModel = existing.into();
            active.name = Set(data.name);
            active.full_name = Set(data.full_name);
            active.founded_date = Set(data.founded_date);
            active.slogan = Set(data.slogan);
            active.mission = Set(data.mission);
            active.email = Set(data.email);
            active.github_url = Set(data.github_url);
            active.website_url = Set(data.website_url);
            active.updated_at = Set(now);
            active.update(db).await
        }
        None => {
            ActiveModel {
                name: Set(data.name),
                full_name: Set(data.full_name),
                founded_date: Set(data.founded_date),
                slogan: Set(data.slogan),
                mission: Set(data.mission),
                email: Set(data.email),
                github_url: Set(data.github_url),
                website_url: Set(data.website_url),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
        }
    }
}
