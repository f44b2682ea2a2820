//! Admin CRUD over news items.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::news;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::news::{
    CreateNewsRequest, NewsListResponse, NewsResponse, UpdateNewsRequest, validate_create_news,
};
use crate::models::shared::{AdminListQuery, Pagination, escape_like, icontains, require_text};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/news",
    tag = "Admin",
    operation_id = "adminListNews",
    summary = "List news items",
    description = "Paginated listing of all news items, published or not, ordered by date then creation time, newest first. `search` matches title and content case-insensitively.",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of news items", body = NewsListResponse),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<NewsListResponse>, AppError> {
    let mut select = news::Entity::find();

    if let Some(term) = query.search_term() {
        let term = escape_like(term);
        select = select.filter(
            Condition::any()
                .add(icontains(news::Column::Title, &term))
                .add(icontains(news::Column::Content, &term)),
        );
    }

    let select = select
        .order_by_desc(news::Column::Date)
        .order_by_desc(news::Column::CreatedAt);

    let paginator = select.paginate(&state.db, query.per_page());
    let counts = paginator.num_items_and_pages().await?;
    let data = paginator.fetch_page(query.page() - 1).await?;

    Ok(Json(NewsListResponse {
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
    path = "/news",
    tag = "Admin",
    operation_id = "adminCreateNews",
    summary = "Create a news item",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "News item created", body = NewsResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_news(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateNewsRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_news(&payload)?;

    let now = chrono::Utc::now();
    let new_news = news::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        date: Set(payload.date),
        content: Set(payload.content.unwrap_or_default()),
        is_published: Set(payload.is_published.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_news.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = "Admin",
    operation_id = "adminGetNews",
    summary = "Get a news item by ID",
    description = "Unlike the public detail route, unpublished items are visible here.",
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 200, description = "News item details", body = NewsResponse),
        (status = 404, description = "News item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<NewsResponse>, AppError> {
    let model = find_news(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/news/{id}",
    tag = "Admin",
    operation_id = "adminUpdateNews",
    summary = "Update a news item",
    params(("id" = i32, Path, description = "News ID")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "News item updated", body = NewsResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "News item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateNewsRequest>,
) -> Result<Json<NewsResponse>, AppError> {
    let model = find_news(&state.db, id).await?;
    let mut active: news::ActiveModel = model.into();

    if let Some(title) = payload.title {
        active.title = Set(require_text("title", &title, 200)?);
    }
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(content) = payload.content {
        active.content = Set(content);
    }
    if let Some(is_published) = payload.is_published {
        active.is_published = Set(is_published);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = "Admin",
    operation_id = "adminDeleteNews",
    summary = "Delete a news item",
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 204, description = "News item deleted"),
        (status = 404, description = "News item not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = news::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("News item {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_news(db: &DatabaseConnection, id: i32) -> Result<news::Model, AppError> {
    news::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("News item {id} not found")))
}
