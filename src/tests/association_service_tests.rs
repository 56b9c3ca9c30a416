#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::errors::AssociationError;
    use crate::models::{CreateMentor, CreateStudent};
    use crate::services::{AssociationService, MentorAssignment};
    use crate::store::{MemoryStore, RecordStore};

    fn service() -> AssociationService {
        AssociationService::new(Arc::new(MemoryStore::new()))
    }

    fn mentor_fields(name: &str) -> CreateMentor {
        CreateMentor {
            name: Some(name.to_string()),
            domain: Some("Backend".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            location: Some("NYC".to_string()),
            experience: Some("5y".to_string()),
        }
    }

    fn student_fields(name: &str) -> CreateStudent {
        CreateStudent {
            name: Some(name.to_string()),
            primary_language: Some("Rust".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            location: Some("Berlin".to_string()),
            fees_paid: Some(true),
        }
    }

    #[tokio::test]
    async fn test_created_mentor_is_listed_with_all_fields() {
        let service = service();
        let mentor = service.create_mentor(mentor_fields("Ann")).await.unwrap();

        let mentors = service.list_all_mentors().await.unwrap();
        assert_eq!(mentors, vec![mentor.clone()]);
        assert_eq!(mentor.name.as_deref(), Some("Ann"));
        assert_eq!(mentor.domain.as_deref(), Some("Backend"));
        assert_eq!(mentor.email.as_deref(), Some("ann@example.com"));
        assert_eq!(mentor.location.as_deref(), Some("NYC"));
        assert_eq!(mentor.experience.as_deref(), Some("5y"));
    }

    #[tokio::test]
    async fn test_new_student_has_no_mentor() {
        let service = service();
        let student = service.create_student(student_fields("Bo")).await.unwrap();

        assert_eq!(student.mentor, None);
        assert_eq!(
            service.get_mentor_of_student(student.id).await.unwrap(),
            MentorAssignment::Unassigned
        );
    }

    #[tokio::test]
    async fn test_set_student_mentor_then_lookup_returns_mentor() {
        let service = service();
        let mentor = service.create_mentor(mentor_fields("Ann")).await.unwrap();
        let student = service.create_student(student_fields("Bo")).await.unwrap();

        let updated = service.set_student_mentor(student.id, mentor.id).await.unwrap();
        assert_eq!(updated.mentor, Some(mentor.id));

        match service.get_mentor_of_student(student.id).await.unwrap() {
            MentorAssignment::Assigned(found) => assert_eq!(found.name.as_deref(), Some("Ann")),
            other => panic!("expected an assigned mentor, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_student_mentor_always_overwrites() {
        let service = service();
        let first = service.create_mentor(mentor_fields("Ann")).await.unwrap();
        let second = service.create_mentor(mentor_fields("Cy")).await.unwrap();
        let student = service.create_student(student_fields("Bo")).await.unwrap();

        service.set_student_mentor(student.id, first.id).await.unwrap();
        let updated = service.set_student_mentor(student.id, second.id).await.unwrap();
        assert_eq!(updated.mentor, Some(second.id));

        // Repeating the same assignment changes nothing
        let again = service.set_student_mentor(student.id, second.id).await.unwrap();
        assert_eq!(again, updated);
    }

    #[tokio::test]
    async fn test_set_student_mentor_on_missing_student_is_not_found() {
        let service = service();
        let mentor = service.create_mentor(mentor_fields("Ann")).await.unwrap();

        let err = service.set_student_mentor(Uuid::new_v4(), mentor.id).await.unwrap_err();
        assert!(matches!(err, AssociationError::NotFound { entity: "Student", .. }));
    }

    #[tokio::test]
    async fn test_set_student_mentor_accepts_unknown_mentor_by_default() {
        let service = service();
        let student = service.create_student(student_fields("Bo")).await.unwrap();
        let ghost = Uuid::new_v4();

        let updated = service.set_student_mentor(student.id, ghost).await.unwrap();
        assert_eq!(updated.mentor, Some(ghost));

        // A dangling reference reads back as unassigned
        assert_eq!(
            service.get_mentor_of_student(student.id).await.unwrap(),
            MentorAssignment::Unassigned
        );
    }

    #[tokio::test]
    async fn test_strict_references_reject_unknown_mentor() {
        let service = service().with_strict_references(true);
        let student = service.create_student(student_fields("Bo")).await.unwrap();

        let err = service.set_student_mentor(student.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AssociationError::InvalidReference { .. }));

        let err = service
            .bulk_assign_students(Uuid::new_v4(), &[student.id])
            .await
            .unwrap_err();
        assert!(matches!(err, AssociationError::InvalidReference { .. }));

        let students = service.list_all_students().await.unwrap();
        assert_eq!(students[0].mentor, None);
    }

    #[tokio::test]
    async fn test_bulk_assign_only_touches_unassigned_students() {
        let service = service();
        let m = service.create_mentor(mentor_fields("Ann")).await.unwrap();
        let m2 = service.create_mentor(mentor_fields("Cy")).await.unwrap();
        let s1 = service.create_student(student_fields("Bo")).await.unwrap();
        let s2 = service.create_student(student_fields("Di")).await.unwrap();
        service.set_student_mentor(s2.id, m2.id).await.unwrap();

        let result = service
            .bulk_assign_students(m.id, &[s1.id, s2.id, Uuid::new_v4()])
            .await
            .unwrap();

        assert!(result.acknowledged);
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let students = service.list_all_students().await.unwrap();
        let by_id = |id: Uuid| students.iter().find(|s| s.id == id).unwrap().mentor;
        assert_eq!(by_id(s1.id), Some(m.id));
        assert_eq!(by_id(s2.id), Some(m2.id));
    }

    #[tokio::test]
    async fn test_bulk_assign_rerun_is_a_no_op() {
        let service = service();
        let m = service.create_mentor(mentor_fields("Ann")).await.unwrap();
        let s1 = service.create_student(student_fields("Bo")).await.unwrap();

        let first = service.bulk_assign_students(m.id, &[s1.id]).await.unwrap();
        let second = service.bulk_assign_students(m.id, &[s1.id]).await.unwrap();

        assert_eq!(first.modified_count, 1);
        assert_eq!(second.modified_count, 0);
    }

    #[tokio::test]
    async fn test_bulk_assign_with_no_ids() {
        let service = service();
        let m = service.create_mentor(mentor_fields("Ann")).await.unwrap();

        let result = service.bulk_assign_students(m.id, &[]).await.unwrap();
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.modified_count, 0);
    }

    #[tokio::test]
    async fn test_list_students_for_mentor_returns_exactly_assigned() {
        let service = service();
        let m = service.create_mentor(mentor_fields("Ann")).await.unwrap();
        let other = service.create_mentor(mentor_fields("Cy")).await.unwrap();
        let s1 = service.create_student(student_fields("Bo")).await.unwrap();
        let s2 = service.create_student(student_fields("Di")).await.unwrap();
        let s3 = service.create_student(student_fields("Ed")).await.unwrap();
        service.create_student(student_fields("Fay")).await.unwrap();

        service.set_student_mentor(s1.id, m.id).await.unwrap();
        service.bulk_assign_students(m.id, &[s2.id]).await.unwrap();
        service.set_student_mentor(s3.id, other.id).await.unwrap();

        let ids: HashSet<Uuid> = service
            .list_students_for_mentor(m.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, HashSet::from([s1.id, s2.id]));
    }

    #[tokio::test]
    async fn test_get_mentor_of_missing_student_is_not_found() {
        let service = service();
        let err = service.get_mentor_of_student(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AssociationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_service_works_over_a_shared_store_handle() {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
        let writer = AssociationService::new(store.clone());
        let reader = AssociationService::new(store.clone());

        let student = writer.create_student(student_fields("Bo")).await.unwrap();
        assert_eq!(reader.list_all_students().await.unwrap(), vec![student]);
        assert_eq!(store.list_students().await.unwrap().len(), 1);
    }
}
