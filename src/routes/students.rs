use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::extract::JsonOrForm;
use crate::{
    errors::{ApiError, OperationFailure},
    models::{ChangeMentorRequest, CreateStudent, Student, StudentMentorResponse, NO_MENTOR_ASSIGNED},
    services::{
        association_service::{parse_mentor_id, parse_student_id},
        MentorAssignment,
    },
    AppState,
};

const CREATE_STUDENT_FAILED: &str = "Failed to create student";
const ASSIGN_MENTOR_FAILED: &str = "Failed to assign mentor to student";
const CHANGE_MENTOR_FAILED: &str = "Failed to assign or change mentor for student";
const GET_MENTOR_FAILED: &str = "Failed to retrieve mentor";
const LIST_STUDENTS_FAILED: &str = "Failed to retrieve students";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", post(create_student))
        .route("/students/{student_id}/mentor/{mentor_id}", put(assign_mentor))
        .route("/students/{student_id}/mentor", put(change_mentor).get(get_student_mentor))
        .route("/allstudents", get(list_students))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created without a mentor", body = Student),
        (status = 400, description = "Unreadable request body"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<JsonOrForm<CreateStudent>, ApiError>,
) -> Result<(StatusCode, Json<Student>), OperationFailure> {
    let JsonOrForm(fields) = body.map_err(|e| state.fail(CREATE_STUDENT_FAILED, e.into()))?;

    let student = state
        .associations
        .create_student(fields)
        .await
        .map_err(|e| state.fail(CREATE_STUDENT_FAILED, e))?;

    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    put,
    path = "/students/{student_id}/mentor/{mentor_id}",
    tag = "students",
    params(
        ("student_id" = String, Path, description = "Student ID"),
        ("mentor_id" = String, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Mentor assigned", body = Student),
        (status = 400, description = "Invalid mentor reference"),
        (status = 404, description = "Student not found"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn assign_mentor(
    State(state): State<Arc<AppState>>,
    Path((student_id, mentor_id)): Path<(String, String)>,
) -> Result<Json<Student>, OperationFailure> {
    let student_id = parse_student_id(&student_id).map_err(|e| state.fail(ASSIGN_MENTOR_FAILED, e))?;
    let mentor_id = parse_mentor_id(&mentor_id).map_err(|e| state.fail(ASSIGN_MENTOR_FAILED, e))?;

    let student = state
        .associations
        .set_student_mentor(student_id, mentor_id)
        .await
        .map_err(|e| state.fail(ASSIGN_MENTOR_FAILED, e))?;

    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/students/{student_id}/mentor",
    tag = "students",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    request_body = ChangeMentorRequest,
    responses(
        (status = 200, description = "Mentor assigned or changed", body = Student),
        (status = 400, description = "Invalid mentor reference or unreadable body"),
        (status = 404, description = "Student not found"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn change_mentor(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
    body: Result<JsonOrForm<ChangeMentorRequest>, ApiError>,
) -> Result<Json<Student>, OperationFailure> {
    let JsonOrForm(request) = body.map_err(|e| state.fail(CHANGE_MENTOR_FAILED, e.into()))?;
    let student_id = parse_student_id(&student_id).map_err(|e| state.fail(CHANGE_MENTOR_FAILED, e))?;
    let mentor_id = parse_mentor_id(&request.mentor_id).map_err(|e| state.fail(CHANGE_MENTOR_FAILED, e))?;

    let student = state
        .associations
        .set_student_mentor(student_id, mentor_id)
        .await
        .map_err(|e| state.fail(CHANGE_MENTOR_FAILED, e))?;

    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students/{student_id}/mentor",
    tag = "students",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Name of the assigned mentor, or \"No mentor assigned\"", body = StudentMentorResponse),
        (status = 404, description = "Student not found"),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn get_student_mentor(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentMentorResponse>, OperationFailure> {
    let student_id = parse_student_id(&student_id).map_err(|e| state.fail(GET_MENTOR_FAILED, e))?;

    let assignment = state
        .associations
        .get_mentor_of_student(student_id)
        .await
        .map_err(|e| state.fail(GET_MENTOR_FAILED, e))?;

    let mentor = match assignment {
        MentorAssignment::Unassigned => Some(NO_MENTOR_ASSIGNED.to_string()),
        MentorAssignment::Assigned(mentor) => mentor.name,
    };

    Ok(Json(StudentMentorResponse { mentor }))
}

#[utoipa::path(
    get,
    path = "/allstudents",
    tag = "students",
    responses(
        (status = 200, description = "Every student", body = Vec<Student>),
        (status = 503, description = "Record store unavailable")
    )
)]
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, OperationFailure> {
    let students = state
        .associations
        .list_all_students()
        .await
        .map_err(|e| state.fail(LIST_STUDENTS_FAILED, e))?;

    Ok(Json(students))
}
