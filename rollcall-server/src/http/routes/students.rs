//! Student endpoints
//!
//! Each handler maps to exactly one store operation.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, StudentIdParam};
use crate::http::server::AppState;
use crate::models::{Student, StudentFields};

/// Acknowledgment returned by DELETE
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /students - list all students
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.store.list().await?;
    Ok(Json(students))
}

/// GET /students/{id} - get a single student
async fn get_student(
    State(state): State<Arc<AppState>>,
    StudentIdParam(id): StudentIdParam,
) -> Result<Json<Student>, ApiError> {
    let student = state.store.get(id).await?;
    Ok(Json(student))
}

/// POST /students - create a student, server assigns the id
async fn create_student(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<StudentFields>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = state.store.create(fields).await?;
    tracing::info!(id = student.id, "student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /students/{id} - overwrite all fields of an existing student
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentIdParam(id): StudentIdParam,
    JsonBody(fields): JsonBody<StudentFields>,
) -> Result<Json<Student>, ApiError> {
    let student = state.store.update(id, fields).await?;
    tracing::info!(id, "student updated");

    Ok(Json(student))
}

/// DELETE /students/{id} - acknowledges whether or not the row existed
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentIdParam(id): StudentIdParam,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(id, "student deleted");

    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
