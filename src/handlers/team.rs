//! Admin CRUD over team members.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::team_member;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::shared::{AdminListQuery, Pagination, escape_like, icontains, require_text};
use crate::models::team::{
    CreateTeamMemberRequest, TeamMemberListResponse, TeamMemberResponse, UpdateTeamMemberRequest,
    validate_create_team_member,
};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/team-members",
    tag = "Admin",
    operation_id = "adminListTeamMembers",
    summary = "List team members",
    description = "Paginated listing ordered by display order, then name. `search` matches name, role, and description case-insensitively.",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of team members", body = TeamMemberListResponse),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_team_members(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<TeamMemberListResponse>, AppError> {
    let mut select = team_member::Entity::find();

    if let Some(term) = query.search_term() {
        let term = escape_like(term);
        select = select.filter(
            Condition::any()
                .add(icontains(team_member::Column::Name, &term))
                .add(icontains(team_member::Column::Role, &term))
                .add(icontains(team_member::Column::Description, &term)),
        );
    }

    let select = select
        .order_by_asc(team_member::Column::Order)
        .order_by_asc(team_member::Column::Name);

    let paginator = select.paginate(&state.db, query.per_page());
    let counts = paginator.num_items_and_pages().await?;
    let data = paginator.fetch_page(query.page() - 1).await?;

    Ok(Json(TeamMemberListResponse {
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
    path = "/team-members",
    tag = "Admin",
    operation_id = "adminCreateTeamMember",
    summary = "Create a team member",
    request_body = CreateTeamMemberRequest,
    responses(
        (status = 201, description = "Team member created", body = TeamMemberResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_team_member(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_team_member(&payload)?;

    let now = chrono::Utc::now();
    let new_member = team_member::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        role: Set(payload.role.trim().to_string()),
        description: Set(payload.description.trim().to_string()),
        photo: Set(payload.photo),
        order: Set(payload.order.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_member.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(TeamMemberResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/team-members/{id}",
    tag = "Admin",
    operation_id = "adminGetTeamMember",
    summary = "Get a team member by ID",
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Team member details", body = TeamMemberResponse),
        (status = 404, description = "Team member not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamMemberResponse>, AppError> {
    let model = find_team_member(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/team-members/{id}",
    tag = "Admin",
    operation_id = "adminUpdateTeamMember",
    summary = "Update a team member",
    params(("id" = i32, Path, description = "Team member ID")),
    request_body = UpdateTeamMemberRequest,
    responses(
        (status = 200, description = "Team member updated", body = TeamMemberResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Team member not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateTeamMemberRequest>,
) -> Result<Json<TeamMemberResponse>, AppError> {
    let model = find_team_member(&state.db, id).await?;
    let mut active: team_member::ActiveModel = model.into();

    if let Some(name) = payload.name {
        active.name = Set(require_text("name", &name, 100)?);
    }
    if let Some(role) = payload.role {
        active.role = Set(require_text("role", &role, 100)?);
    }
    if let Some(description) = payload.description {
        active.description = Set(description.trim().to_string());
    }
    if let Some(photo) = payload.photo {
        active.photo = Set(photo);
    }
    if let Some(order) = payload.order {
        active.order = Set(order);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/team-members/{id}",
    tag = "Admin",
    operation_id = "adminDeleteTeamMember",
    summary = "Delete a team member",
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 204, description = "Team member deleted"),
        (status = 404, description = "Team member not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = team_member::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Team member {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_team_member(
    db: &DatabaseConnection,
    id: i32,
) -> Result<team_member::Model, AppError> {
    team_member::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team member {id} not found")))
}
