//! Read-only page-context handlers for the public site.

use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::*;
use tracing::instrument;

use crate::entity::achievement::{self, Category};
use crate::entity::partner::{self, PartnerType};
use crate::entity::{lab_info, news, team_member};
use crate::error::{AppError, ErrorBody};
use crate::models::achievement::AchievementResponse;
use crate::models::news::NewsResponse;
use crate::models::pages::{
    AchievementsPage, ContactPage, HomePage, NewsListPage, PartnersPage, TeamPage,
};
use crate::state::AppState;

/// Number of news items shown on the home page.
const HOME_NEWS_LIMIT: u64 = 5;

#[utoipa::path(
    get,
    path = "/home",
    tag = "Pages",
    operation_id = "homePage",
    summary = "Home page context",
    description = "Returns the lab info singleton (or null) and the five most recent published news items, newest first.",
    responses(
        (status = 200, description = "Home page context", body = HomePage),
    ),
)]
#[instrument(skip(state))]
pub async fn home_page(State(state): State<AppState>) -> Result<Json<HomePage>, AppError> {
    let lab_info = lab_info::Entity::find().one(&state.db).await?;

    let latest_news = news::Entity::find()
        .filter(news::Column::IsPublished.eq(true))
        .order_by_desc(news::Column::Date)
        .limit(HOME_NEWS_LIMIT)
        .all(&state.db)
        .await?;

    Ok(Json(HomePage {
        lab_info: lab_info.map(Into::into),
        news: latest_news.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/team",
    tag = "Pages",
    operation_id = "teamPage",
    summary = "Team page context",
    description = "Returns all team members ordered by display order, then name.",
    responses(
        (status = 200, description = "Team page context", body = TeamPage),
    ),
)]
#[instrument(skip(state))]
pub async fn team_page(State(state): State<AppState>) -> Result<Json<TeamPage>, AppError> {
    let members = team_member::Entity::find()
        .order_by_asc(team_member::Column::Order)
        .order_by_asc(team_member::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(TeamPage {
        members: members.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/achievements",
    tag = "Pages",
    operation_id = "achievementsPage",
    summary = "Achievements page context",
    description = "Returns all achievements ordered by event date descending, plus per-category subsets in the same order.",
    responses(
        (status = 200, description = "Achievements page context", body = AchievementsPage),
    ),
)]
#[instrument(skip(state))]
pub async fn achievements_page(
    State(state): State<AppState>,
) -> Result<Json<AchievementsPage>, AppError> {
    let achievements = achievement::Entity::find()
        .order_by_desc(achievement::Column::EventDate)
        .all(&state.db)
        .await?;

    let by_category = |category: Category| -> Vec<AchievementResponse> {
        achievements
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .map(Into::into)
            .collect()
    };

    Ok(Json(AchievementsPage {
        competitions: by_category(Category::Competition),
        papers: by_category(Category::Paper),
        awards: by_category(Category::Award),
        achievements: achievements.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/achievements/{id}",
    tag = "Pages",
    operation_id = "achievementDetailPage",
    summary = "Achievement detail context",
    params(("id" = i32, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Achievement detail", body = AchievementResponse),
        (status = 404, description = "Achievement not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn achievement_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AchievementResponse>, AppError> {
    let model = achievement::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Achievement {id} not found")))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/partners",
    tag = "Pages",
    operation_id = "partnersPage",
    summary = "Partners page context",
    description = "Returns active partners grouped by type, each group ordered by name.",
    responses(
        (status = 200, description = "Partners page context", body = PartnersPage),
    ),
)]
#[instrument(skip(state))]
pub async fn partners_page(State(state): State<AppState>) -> Result<Json<PartnersPage>, AppError> {
    Ok(Json(PartnersPage {
        universities: active_partners(&state.db, PartnerType::University).await?,
        schools: active_partners(&state.db, PartnerType::School).await?,
        companies: active_partners(&state.db, PartnerType::Company).await?,
    }))
}

async fn active_partners(
    db: &DatabaseConnection,
    partner_type: PartnerType,
) -> Result<Vec<crate::models::partner::PartnerResponse>, AppError> {
    let partners = partner::Entity::find()
        .filter(partner::Column::PartnerType.eq(partner_type))
        .filter(partner::Column::IsActive.eq(true))
        .order_by_asc(partner::Column::Name)
        .all(db)
        .await?;

    Ok(partners.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/contact",
    tag = "Pages",
    operation_id = "contactPage",
    summary = "Contact page context",
    responses(
        (status = 200, description = "Contact page context", body = ContactPage),
    ),
)]
#[instrument(skip(state))]
pub async fn contact_page(State(state): State<AppState>) -> Result<Json<ContactPage>, AppError> {
    let lab_info = lab_info::Entity::find().one(&state.db).await?;

    Ok(Json(ContactPage {
        lab_info: lab_info.map(Into::into),
    }))
}

#[utoipa::path(
    get,
    path = "/news",
    tag = "Pages",
    operation_id = "newsListPage",
    summary = "News list page context",
    description = "Returns all published news items, newest first.",
    responses(
        (status = 200, description = "News list page context", body = NewsListPage),
    ),
)]
#[instrument(skip(state))]
pub async fn news_list(State(state): State<AppState>) -> Result<Json<NewsListPage>, AppError> {
    let items = news::Entity::find()
        .filter(news::Column::IsPublished.eq(true))
        .order_by_desc(news::Column::Date)
        .all(&state.db)
        .await?;

    Ok(Json(NewsListPage {
        news_list: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = "Pages",
    operation_id = "newsDetailPage",
    summary = "News detail context",
    description = "Returns a published news item. Unpublished or missing items are reported as not found.",
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 200, description = "News detail", body = NewsResponse),
        (status = 404, description = "News item not found or unpublished (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn news_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<NewsResponse>, AppError> {
    let model = news::Entity::find_by_id(id)
        .filter(news::Column::IsPublished.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News item {id} not found")))?;

    Ok(Json(model.into()))
}
