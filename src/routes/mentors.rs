use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use super::extract::JsonOrForm;
use crate::{
    errors::{ApiError, OperationFailure},
    models::{AddStudentsRequest, BulkAssignResult, CreateMentor, Mentor, Student},
    services::association_service::parse_mentor_id,
    AppState,
};

const CREATE_MENTOR_FAILED: &str = "Failed to create mentor";
const ADD_STUDENTS_FAILED: &str = "Failed to add students to mentor";
const LIST_STUDENTS_FAILED: &str = "Failed to retrieve students";
const LIST_MENTORS_FAILED: &str = "Failed to retrieve mentors";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mentors", post(create_mentor))
        .route("/mentors/{mentor_id}/add-students", put(add_students))
        .route("/mentors/{mentor_id}/students", get(list_mentor_students))
        .route("/allmentors", get(list_mentors))
}

#[utoipa::path(
    post,
    path = "/mentors",
    tag = "mentors",
    request_body = CreateMentor,
    responses(
        (status = 201, description = "Mentor created", body = Mentor),
        (status = 400, description = "Unreadable request body"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn create_mentor(
    State(state): State<Arc<AppState>>,
    body: Result<JsonOrForm<CreateMentor>, ApiError>,
) -> Result<(StatusCode, Json<Mentor>), OperationFailure> {
    let JsonOrForm(fields) = body.map_err(|e| state.fail(CREATE_MENTOR_FAILED, e.into()))?;

    let mentor = state
        .associations
        .create_mentor(fields)
        .await
        .map_err(|e| state.fail(CREATE_MENTOR_FAILED, e))?;

    Ok((StatusCode::CREATED, Json(mentor)))
}

#[utoipa::path(
    put,
    path = "/mentors/{mentor_id}/add-students",
    tag = "mentors",
    params(
        ("mentor_id" = String, Path, description = "Mentor ID")
    ),
    request_body = AddStudentsRequest,
    responses(
        (status = 200, description = "Students without a mentor were assigned", body = BulkAssignResult),
        (status = 400, description = "Invalid mentor reference or unreadable body"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn add_students(
    State(state): State<Arc<AppState>>,
    Path(mentor_id): Path<String>,
    body: Result<JsonOrForm<AddStudentsRequest>, ApiError>,
) -> Result<Json<BulkAssignResult>, OperationFailure> {
    let JsonOrForm(request) = body.map_err(|e| state.fail(ADD_STUDENTS_FAILED, e.into()))?;
    let mentor_id = parse_mentor_id(&mentor_id).map_err(|e| state.fail(ADD_STUDENTS_FAILED, e))?;

    // Malformed ids cannot match a student, same as unknown ones
    let student_ids: Vec<Uuid> = request
        .student_ids
        .iter()
        .filter_map(|raw| Uuid::parse_str(raw.trim()).ok())
        .collect();
    if student_ids.len() < request.student_ids.len() {
        tracing::debug!(
            "Ignoring {} malformed student ids for mentor {}",
            request.student_ids.len() - student_ids.len(),
            mentor_id
        );
    }

    let result = state
        .associations
        .bulk_assign_students(mentor_id, &student_ids)
        .await
        .map_err(|e| state.fail(ADD_STUDENTS_FAILED, e))?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/mentors/{mentor_id}/students",
    tag = "mentors",
    params(
        ("mentor_id" = String, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Students assigned to the mentor", body = Vec<Student>),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn list_mentor_students(
    State(state): State<Arc<AppState>>,
    Path(mentor_id): Path<String>,
) -> Result<Json<Vec<Student>>, OperationFailure> {
    let Ok(mentor_id) = parse_mentor_id(&mentor_id) else {
        return Ok(Json(Vec::new()));
    };

    let students = state
        .associations
        .list_students_for_mentor(mentor_id)
        .await
        .map_err(|e| state.fail(LIST_STUDENTS_FAILED, e))?;

    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/allmentors",
    tag = "mentors",
    responses(
        (status = 200, description = "Every mentor", body = Vec<Mentor>),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn list_mentors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Mentor>>, OperationFailure> {
    let mentors = state
        .associations
        .list_all_mentors()
        .await
        .map_err(|e| state.fail(LIST_MENTORS_FAILED, e))?;

    Ok(Json(mentors))
}
