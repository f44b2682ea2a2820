//! Admin CRUD over achievement records.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::achievement;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::achievement::{
    AchievementListResponse, AchievementResponse, CreateAchievementRequest,
    UpdateAchievementRequest, validate_create_achievement,
};
use crate::models::shared::{AdminListQuery, Pagination, escape_like, icontains, require_text};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/achievements",
    tag = "Admin",
    operation_id = "adminListAchievements",
    summary = "List achievements",
    description = "Paginated listing ordered by event date descending, then category. `search` matches event name, work title, and award case-insensitively.",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of achievements", body = AchievementListResponse),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_achievements(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<AchievementListResponse>, AppError> {
    let mut select = achievement::Entity::find();

    if let Some(term) = query.search_term() {
        let term = escape_like(term);
        select = select.filter(
            Condition::any()
                .add(icontains(achievement::Column::EventName, &term))
                .add(icontains(achievement::Column::WorkTitle, &term))
                .add(icontains(achievement::Column::Award, &term)),
        );
    }

    let select = select
        .order_by_desc(achievement::Column::EventDate)
        .order_by_asc(achievement::Column::Category);

    let paginator = select.paginate(&state.db, query.per_page());
    let counts = paginator.num_items_and_pages().await?;
    let data = paginator.fetch_page(query.page() - 1).await?;

    Ok(Json(AchievementListResponse {
        data: data.into_iter().map(Into::into).collect(),
        pagination: Pagination {
            page: query.page(),
            per_page: query.per_page(),
            total: counts.number_of_items,
            total_pages: counts.number_of_pages,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/achievements",
    tag = "Admin",
    operation_id = "adminCreateAchievement",
    summary = "Create an achievement",
    request_body = CreateAchievementRequest,
    responses(
        (status = 201, description = "Achievement created", body = AchievementResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(event_name = %payload.event_name))]
pub async fn create_achievement(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAchievementRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_achievement(&payload)?;

    let now = chrono::Utc::now();
    let new_achievement = achievement::ActiveModel {
        category: Set(payload.category),
        event_name: Set(payload.event_name.trim().to_string()),
        work_title: Set(payload.work_title.trim().to_string()),
        award: Set(payload.award.trim().to_string()),
        event_date: Set(payload.event_date),
        certificate_image: Set(payload.certificate_image),
        description: Set(payload.description.unwrap_or_default()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_achievement.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(AchievementResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/achievements/{id}",
    tag = "Admin",
    operation_id = "adminGetAchievement",
    summary = "Get an achievement by ID",
    params(("id" = i32, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Achievement details", body = AchievementResponse),
        (status = 404, description = "Achievement not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AchievementResponse>, AppError> {
    let model = find_achievement(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/achievements/{id}",
    tag = "Admin",
    operation_id = "adminUpdateAchievement",
    summary = "Update an achievement",
    params(("id" = i32, Path, description = "Achievement ID")),
    request_body = UpdateAchievementRequest,
    responses(
        (status = 200, description = "Achievement updated", body = AchievementResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Achievement not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_achievement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateAchievementRequest>,
) -> Result<Json<AchievementResponse>, AppError> {
    let model = find_achievement(&state.db, id).await?;
    let mut active: achievement::ActiveModel = model.into();

    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(event_name) = payload.event_name {
        active.event_name = Set(require_text("event_name", &event_name, 200)?);
    }
    if let Some(work_title) = payload.work_title {
        active.work_title = Set(require_text("work_title", &work_title, 300)?);
    }
    if let Some(award) = payload.award {
        active.award = Set(require_text("award", &award, 100)?);
    }
    if let Some(event_date) = payload.event_date {
        active.event_date = Set(event_date);
    }
    if let Some(certificate_image) = payload.certificate_image {
        active.certificate_image = Set(certificate_image);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/achievements/{id}",
    tag = "Admin",
    operation_id = "adminDeleteAchievement",
    summary = "Delete an achievement",
    params(("id" = i32, Path, description = "Achievement ID")),
    responses(
        (status = 204, description = "Achievement deleted"),
        (status = 404, description = "Achievement not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_achievement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = achievement::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Achievement {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_achievement(
    db: &DatabaseConnection,
    id: i32,
) -> Result<achievement::Model, AppError> {
    achievement::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Achievement {id} not found")))
}
