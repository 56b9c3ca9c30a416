use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    models::{
        AddStudentsRequest, BulkAssignResult, ChangeMentorRequest, CreateMentor, CreateStudent,
        Mentor, Student, StudentMentorResponse,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Mentor endpoints
        crate::routes::mentors::create_mentor,
        crate::routes::mentors::add_students,
        crate::routes::mentors::list_mentor_students,
        crate::routes::mentors::list_mentors,
        // Student endpoints
        crate::routes::students::create_student,
        crate::routes::students::assign_mentor,
        crate::routes::students::change_mentor,
        crate::routes::students::get_student_mentor,
        crate::routes::students::list_students,
    ),
    components(
        schemas(
            Mentor, CreateMentor, Student, CreateStudent, AddStudentsRequest,
            ChangeMentorRequest, BulkAssignResult, StudentMentorResponse
        )
    ),
    tags(
        (name = "mentors", description = "Mentor records and their students"),
        (name = "students", description = "Student records and mentor assignment"),
    ),
    info(
        title = "Mentorlink API",
        version = "0.1.0",
        description = "Mentor and student records with mentor assignment"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
