//! Admin CRUD over partner organizations.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::partner;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::partner::{
    CreatePartnerRequest, PartnerListResponse, PartnerResponse, UpdatePartnerRequest,
    validate_create_partner,
};
use crate::models::shared::{AdminListQuery, Pagination, escape_like, icontains, require_text};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/partners",
    tag = "Admin",
    operation_id = "adminListPartners",
    summary = "List partners",
    description = "Paginated listing of all partners, active or not, ordered by type, display order, then name. `search` matches name and description case-insensitively.",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of partners", body = PartnerListResponse),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_partners(
    State(state): State<AppState>,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<PartnerListResponse>, AppError> {
    let mut select = partner::Entity::find();

    if let Some(term) = query.search_term() {
        let term = escape_like(term);
        select = select.filter(
            Condition::any()
                .add(icontains(partner::Column::Name, &term))
                .add(icontains(partner::Column::Description, &term)),
        );
    }

    let select = select
        .order_by_asc(partner::Column::PartnerType)
        .order_by_asc(partner::Column::Order)
        .order_by_asc(partner::Column::Name);

    let paginator = select.paginate(&state.db, query.per_page());
    let counts = paginator.num_items_and_pages().await?;
    let data = paginator.fetch_page(query.page() - 1).await?;

    Ok(Json(PartnerListResponse {
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
    path = "/partners",
    tag = "Admin",
    operation_id = "adminCreatePartner",
    summary = "Create a partner",
    request_body = CreatePartnerRequest,
    responses(
        (status = 201, description = "Partner created", body = PartnerResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_partner(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePartnerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_partner(&payload)?;

    let now = chrono::Utc::now();
    let new_partner = partner::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        partner_type: Set(payload.partner_type),
        description: Set(payload.description.unwrap_or_default()),
        website_url: Set(payload.website_url.unwrap_or_default()),
        logo: Set(payload.logo),
        order: Set(payload.order.unwrap_or(0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_partner.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(PartnerResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/partners/{id}",
    tag = "Admin",
    operation_id = "adminGetPartner",
    summary = "Get a partner by ID",
    params(("id" = i32, Path, description = "Partner ID")),
    responses(
        (status = 200, description = "Partner details", body = PartnerResponse),
        (status = 404, description = "Partner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PartnerResponse>, AppError> {
    let model = find_partner(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/partners/{id}",
    tag = "Admin",
    operation_id = "adminUpdatePartner",
    summary = "Update a partner",
    params(("id" = i32, Path, description = "Partner ID")),
    request_body = UpdatePartnerRequest,
    responses(
        (status = 200, description = "Partner updated", body = PartnerResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Partner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePartnerRequest>,
) -> Result<Json<PartnerResponse>, AppError> {
    let model = find_partner(&state.db, id).await?;
    let mut active: partner::ActiveModel = model.into();

    if let Some(name) = payload.name {
        active.name = Set(require_text("name", &name, 200)?);
    }
    if let Some(partner_type) = payload.partner_type {
        active.partner_type = Set(partner_type);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(website_url) = payload.website_url {
        active.website_url = Set(website_url.trim().to_string());
    }
    if let Some(logo) = payload.logo {
        active.logo = Set(logo);
    }
    if let Some(order) = payload.order {
        active.order = Set(order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/partners/{id}",
    tag = "Admin",
    operation_id = "adminDeletePartner",
    summary = "Delete a partner",
    params(("id" = i32, Path, description = "Partner ID")),
    responses(
        (status = 204, description = "Partner deleted"),
        (status = 404, description = "Partner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = partner::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Partner {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_partner(db: &DatabaseConnection, id: i32) -> Result<partner::Model, AppError> {
    partner::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Partner {id} not found")))
}
