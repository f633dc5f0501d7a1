use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::models::*;
use crate::service::GradebookService;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn not_found(what: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("{what} not found"))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Students
// ============================================================

pub async fn list_students(
    State(service): State<GradebookService>,
) -> Result<Json<Vec<Student>>, (StatusCode, String)> {
    service.list_students().map(Json).map_err(internal_error)
}

pub async fn create_student(
    State(service): State<GradebookService>,
    Json(input): Json<CreateStudentInput>,
) -> Result<(StatusCode, Json<Student>), (StatusCode, String)> {
    service
        .create_student(&input.first_name, &input.last_name, &input.email)
        .map(|s| (StatusCode::CREATED, Json(s)))
        .map_err(internal_error)
}

pub async fn student_detail(
    State(service): State<GradebookService>,
    Path(id): Path<i64>,
) -> Result<Json<GradebookEntry>, (StatusCode, String)> {
    service
        .student_detail(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Student"))
}

pub async fn delete_student(
    State(service): State<GradebookService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    if !service.student_exists(id).map_err(internal_error)? {
        return Err(not_found("Student"));
    }

    service.delete_student(id).map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Grades
// ============================================================

#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub grade: f64,
    pub student_id: i64,
    /// Subject tag; anything outside math/science/history is rejected here.
    pub subject: String,
}

pub async fn create_grade(
    State(service): State<GradebookService>,
    Json(input): Json<CreateGradeRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let Some(subject) = Subject::from_str(&input.subject) else {
        return Err((StatusCode::BAD_REQUEST, "Invalid grade".to_string()));
    };

    let created = service
        .create_grade(input.grade, input.student_id, subject)
        .map_err(internal_error)?;

    if created {
        Ok(StatusCode::CREATED)
    } else {
        Err((StatusCode::BAD_REQUEST, "Invalid grade".to_string()))
    }
}

/// Delete a grade and return the owning student's refreshed gradebook entry.
pub async fn delete_grade(
    State(service): State<GradebookService>,
    Path((subject, id)): Path<(String, i64)>,
) -> Result<Json<GradebookEntry>, (StatusCode, String)> {
    let Some(subject) = Subject::from_str(&subject) else {
        return Err(not_found("Grade"));
    };

    let Some(student_id) = service.delete_grade(id, subject).map_err(internal_error)? else {
        return Err(not_found("Grade"));
    };

    service
        .student_detail(student_id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Student"))
}
