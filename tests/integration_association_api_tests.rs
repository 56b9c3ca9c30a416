use axum::http::{Method, StatusCode};
use mentorlink::models::{Mentor, Student, NO_MENTOR_ASSIGNED};
use mentorlink::test_utils::TestContext;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn test_full_mentorship_workflow() {
    let ctx = TestContext::new();

    let ann = ctx
        .create_mentor(json!({
            "name": "Ann",
            "domain": "Backend",
            "location": "NYC",
            "experience": "5y",
            "email": "a@x.com"
        }))
        .await;
    let cy = ctx.create_mentor(json!({"name": "Cy", "domain": "Frontend"})).await;

    let bo = ctx.create_student(json!({"name": "Bo", "primaryLanguage": "Rust", "feesPaid": true})).await;
    let di = ctx.create_student(json!({"name": "Di", "primaryLanguage": "Go", "feesPaid": false})).await;
    let ed = ctx.create_student(json!({"name": "Ed", "primaryLanguage": "Zig"})).await;

    // Ed goes to Cy first; bulk assignment to Ann must not steal him
    let (status, _) = ctx
        .request(Method::PUT, &format!("/students/{}/mentor/{}", ed.id, cy.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = ctx
        .request(
            Method::PUT,
            &format!("/mentors/{}/add-students", ann.id),
            Some(json!({"studentIds": [bo.id, di.id, ed.id]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 2);

    let (_, body) = ctx
        .request(Method::GET, &format!("/mentors/{}/students", ann.id), None)
        .await;
    let anns: Vec<Student> = serde_json::from_value(body).unwrap();
    let ids: HashSet<Uuid> = anns.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([bo.id, di.id]));

    // Explicit reassignment always wins
    let (status, _) = ctx
        .request(
            Method::PUT,
            &format!("/students/{}/mentor", di.id),
            Some(json!({"mentorId": cy.id})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = ctx
        .request(Method::GET, &format!("/students/{}/mentor", di.id), None)
        .await;
    assert_eq!(body, json!({"mentor": "Cy"}));

    let (_, body) = ctx
        .request(Method::GET, &format!("/mentors/{}/students", cy.id), None)
        .await;
    let cys: Vec<Student> = serde_json::from_value(body).unwrap();
    let ids: HashSet<Uuid> = cys.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([di.id, ed.id]));

    let (_, body) = ctx.request(Method::GET, "/allmentors", None).await;
    let mentors: Vec<Mentor> = serde_json::from_value(body).unwrap();
    assert_eq!(mentors, vec![ann, cy]);

    let (_, body) = ctx.request(Method::GET, "/allstudents", None).await;
    let students: Vec<Student> = serde_json::from_value(body).unwrap();
    assert_eq!(students.len(), 3);
}

#[tokio::test]
async fn test_student_without_mentor_reports_sentinel() {
    let ctx = TestContext::new();
    let student = ctx.create_student(json!({"name": "Fay"})).await;

    let (status, body) = ctx
        .request(Method::GET, &format!("/students/{}/mentor", student.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mentor"], NO_MENTOR_ASSIGNED);
}

#[tokio::test]
async fn test_concurrent_bulk_assignments_assign_each_student_once() {
    let ctx = TestContext::new();
    let a = ctx.create_mentor(json!({"name": "Ann"})).await;
    let b = ctx.create_mentor(json!({"name": "Cy"})).await;
    let student = ctx.create_student(json!({"name": "Bo"})).await;

    let body = json!({"studentIds": [student.id]});
    let uri_a = format!("/mentors/{}/add-students", a.id);
    let uri_b = format!("/mentors/{}/add-students", b.id);
    let ((_, first), (_, second)) = tokio::join!(
        ctx.request(Method::PUT, &uri_a, Some(body.clone())),
        ctx.request(Method::PUT, &uri_b, Some(body.clone())),
    );

    let modified = first["modifiedCount"].as_u64().unwrap() + second["modifiedCount"].as_u64().unwrap();
    assert_eq!(modified, 1);

    let (_, body) = ctx
        .request(Method::GET, &format!("/students/{}/mentor", student.id), None)
        .await;
    let name = body["mentor"].as_str().unwrap();
    assert!(name == "Ann" || name == "Cy", "unexpected mentor {}", name);
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let ctx = TestContext::new();

    let (status, body) = ctx.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/mentors",
        "/students",
        "/students/{student_id}/mentor/{mentor_id}",
        "/mentors/{mentor_id}/add-students",
        "/students/{student_id}/mentor",
        "/mentors/{mentor_id}/students",
        "/allstudents",
        "/allmentors",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
