//! Student API handlers
//!
//! Each handler is a short pipeline: decode, validate, call the storage
//! gateway, map the result. Validation and decode failures terminate at
//! this boundary and never reach storage.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use super::dto::{CreateStudentRequest, CreateStudentResponse, ListStudentsParams, StudentDto};
use crate::domain::StudentRepositoryInterface;
use crate::interfaces::http::common::{ApiError, ErrorResponse, ValidatedJson};
use crate::shared::types::{PaginatedResult, PaginationParams};

/// Student handler state — the repository is injected so tests can
/// substitute an in-memory fake.
#[derive(Clone)]
pub struct StudentHandlerState {
    pub students: Arc<dyn StudentRepositoryInterface>,
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = CreateStudentResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 500, description = "Storage fault", body = ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<StudentHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<CreateStudentResponse>), ApiError> {
    let id = state
        .students
        .create(request.name(), request.email(), request.age())
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create student");
            ApiError::internal(e.to_string())
        })?;

    info!(id, name = request.name(), "student created");
    Ok((StatusCode::CREATED, Json(CreateStudentResponse { id })))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = StudentDto),
        (status = 400, description = "Non-numeric ID", body = ErrorResponse),
        (status = 404, description = "No student with that ID", body = ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<StudentHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<StudentDto>, ApiError> {
    let id: i64 = id.parse().map_err(|e: std::num::ParseIntError| {
        error!(id = %id, error = %e, "invalid student ID");
        ApiError::bad_request("invalid ID", e.to_string())
    })?;

    let student = state.students.get_by_id(id).await.map_err(|e| {
        if e.is_not_found() {
            info!(id, "student not found");
        } else {
            error!(id, error = %e, "failed to fetch student");
        }
        ApiError::from(e)
    })?;

    Ok(Json(StudentDto::from(student)))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    params(ListStudentsParams),
    responses(
        (status = 200, description = "Paginated student list", body = PaginatedResult<StudentDto>),
        (status = 500, description = "Storage fault", body = ErrorResponse)
    )
)]
pub async fn list_students(
    State(state): State<StudentHandlerState>,
    Query(query): Query<ListStudentsParams>,
) -> Result<Json<PaginatedResult<StudentDto>>, ApiError> {
    let params = PaginationParams::resolve(query.page.as_deref(), query.limit.as_deref());

    // Two independent reads; no snapshot consistency across them.
    let students = state
        .students
        .list(params.offset(), params.limit)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to list students");
            ApiError::internal(e.to_string())
        })?;

    let total_items = state.students.count().await.map_err(|e| {
        error!(error = %e, "failed to count students");
        ApiError::internal(e.to_string())
    })?;

    let data: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();
    Ok(Json(PaginatedResult::new(data, total_items, params)))
}

// ── Tests ──────────────────────────────────────────────────────
