//! Admin management of the lab info singleton.
//!
//! The lab has exactly one identity, so this resource never grows past one
//! row: creation is refused once a row exists (update it instead), and
//! deletion is always refused.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::lab_info;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::lab_info::{
    CreateLabInfoRequest, LabInfoResponse, UpdateLabInfoRequest, validate_create_lab_info,
};
use crate::models::shared::require_text;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/lab-info",
    tag = "Admin",
    operation_id = "adminGetLabInfo",
    summary = "Get the lab info singleton",
    responses(
        (status = 200, description = "The lab info record, or null when none exists", body = Option<LabInfoResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn get_lab_info(
    State(state): State<AppState>,
) -> Result<Json<Option<LabInfoResponse>>, AppError> {
    let model = lab_info::Entity::find().one(&state.db).await?;
    Ok(Json(model.map(Into::into)))
}

#[utoipa::path(
    post,
    path = "/lab-info",
    tag = "Admin",
    operation_id = "adminCreateLabInfo",
    summary = "Create the lab info record",
    description = "Only valid while no lab info exists; once a record is present, creation is refused and updates must go through PATCH.",
    request_body = CreateLabInfoRequest,
    responses(
        (status = 201, description = "Lab info created", body = LabInfoResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "A lab info record already exists (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_lab_info(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLabInfoRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_lab_info(&payload)?;

    if lab_info::Entity::find().one(&state.db).await?.is_some() {
        return Err(AppError::Conflict(
            "Lab info already exists; update the existing record instead".into(),
        ));
    }

    let model = lab_info::save(&state.db, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(LabInfoResponse::from(model))))
}

#[utoipa::path(
    patch,
    path = "/lab-info",
    tag = "Admin",
    operation_id = "adminUpdateLabInfo",
    summary = "Update the lab info record",
    request_body = UpdateLabInfoRequest,
    responses(
        (status = 200, description = "Lab info updated", body = LabInfoResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No lab info record exists yet (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_lab_info(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateLabInfoRequest>,
) -> Result<Json<LabInfoResponse>, AppError> {
    let model = lab_info::Entity::find()
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No lab info record exists yet".into()))?;

    let mut active: lab_info::ActiveModel = model.into();

    if let Some(name) = payload.name {
        active.name = Set(require_text("name", &name, 100)?);
    }
    if let Some(full_name) = payload.full_name {
        active.full_name = Set(require_text("full_name", &full_name, 200)?);
    }
    if let Some(founded_date) = payload.founded_date {
        active.founded_date = Set(founded_date);
    }
    if let Some(slogan) = payload.slogan {
        active.slogan = Set(require_text("slogan", &slogan, 300)?);
    }
    if let Some(mission) = payload.mission {
        active.mission = Set(mission);
    }
    if let Some(email) = payload.email {
        active.email = Set(require_text("email", &email, 254)?);
    }
    if let Some(github_url) = payload.github_url {
        active.github_url = Set(github_url.trim().to_string());
    }
    if let Some(website_url) = payload.website_url {
        active.website_url = Set(website_url.trim().to_string());
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/lab-info",
    tag = "Admin",
    operation_id = "adminDeleteLabInfo",
    summary = "Delete the lab info record (always refused)",
    description = "Deleting the lab identity is never allowed. The request succeeds without touching the record.",
    responses(
        (status = 204, description = "Nothing was deleted; the record, if any, is untouched"),
    ),
)]
#[instrument]
pub async fn delete_lab_info() -> StatusCode {
    // Refusal is policy here, not failure; nothing is reported to the caller.
    StatusCode::NO_CONTENT
}
