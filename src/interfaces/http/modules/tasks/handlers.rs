//! Task handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{TaskDto, TaskRequest};
use crate::application::TaskService;
use crate::domain::{DomainResult, Task};
use crate::interfaces::http::common::{
    not_found, storage_failure, ApiError, ApiResponse, ValidatedJson,
};

/// Task handler state
#[derive(Clone)]
pub struct TaskState {
    pub service: Arc<TaskService>,
}

/// Map a read-modify-write outcome onto 200 / 404 / 500.
fn respond(result: DomainResult<Option<Task>>) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    match result.map_err(storage_failure)? {
        Some(t) => Ok(Json(ApiResponse::success(TaskDto::from(t)))),
        None => Err(not_found("Task")),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All tasks ordered by id", body = ApiResponse<Vec<TaskDto>>)
    )
)]
pub async fn list_tasks(
    State(state): State<TaskState>,
) -> Result<Json<ApiResponse<Vec<TaskDto>>>, ApiError> {
    let tasks = state.service.list().await.map_err(storage_failure)?;
    Ok(Json(ApiResponse::success(
        tasks.into_iter().map(TaskDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task details", body = ApiResponse<TaskDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    respond(state.service.get(id).await)
}

#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "Tasks",
    request_body = TaskRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<TaskDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_task(
    State(state): State<TaskState>,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TaskDto>>), ApiError> {
    let created = state
        .service
        .create(request.into())
        .await
        .map_err(storage_failure)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(TaskDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TaskDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    respond(state.service.update(id, request.into()).await)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete(id).await.map_err(storage_failure)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Task"))
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}/complete",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Marked completed", body = ApiResponse<TaskDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn complete_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    respond(state.service.set_completed(id, true).await)
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}/uncomplete",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Marked pending", body = ApiResponse<TaskDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn uncomplete_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    respond(state.service.set_completed(id, false).await)
}

#[utoipa::path(
    patch,
    path = "/api/v1/tasks/{id}/toggle",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Completion flipped", body = ApiResponse<TaskDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn toggle_task(
    State(state): State<TaskState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TaskDto>>, ApiError> {
    respond(state.service.toggle_completed(id).await)
}
