use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::RecordStore;
use crate::models::{BulkAssignResult, CreateMentor, CreateStudent, Mentor, Student};

#[derive(Default)]
struct Collections {
    mentors: Vec<Mentor>,
    students: Vec<Student>,
}

/// Process-local store. Records live in insertion order; a single write
/// lock covers each update so bulk assignment is atomic as a whole.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_mentor(&self, fields: CreateMentor) -> Result<Mentor> {
        let mentor = Mentor::from_fields(Uuid::new_v4(), fields);
        self.inner.write().await.mentors.push(mentor.clone());
        Ok(mentor)
    }

    async fn insert_student(&self, fields: CreateStudent) -> Result<Student> {
        let student = Student::from_fields(Uuid::new_v4(), fields);
        self.inner.write().await.students.push(student.clone());
        Ok(student)
    }

    async fn find_mentor(&self, id: Uuid) -> Result<Option<Mentor>> {
        let inner = self.inner.read().await;
        Ok(inner.mentors.iter().find(|m| m.id == id).cloned())
    }

    async fn find_student(&self, id: Uuid) -> Result<Option<Student>> {
        let inner = self.inner.read().await;
        Ok(inner.students.iter().find(|s| s.id == id).cloned())
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>> {
        Ok(self.inner.read().await.mentors.clone())
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.inner.read().await.students.clone())
    }

    async fn find_students_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Student>> {
        let inner = self.inner.read().await;
        Ok(inner
            .students
            .iter()
            .filter(|s| s.mentor == Some(mentor_id))
            .cloned()
            .collect())
    }

    async fn set_student_mentor(&self, student_id: Uuid, mentor_id: Uuid) -> Result<Option<Student>> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .map(|student| {
                student.mentor = Some(mentor_id);
                student.clone()
            }))
    }

    async fn assign_unassigned_students(
        &self,
        mentor_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<BulkAssignResult> {
        let wanted: HashSet<Uuid> = student_ids.iter().copied().collect();
        let mut inner = self.inner.write().await;

        let mut matched = 0;
        for student in inner
            .students
            .iter_mut()
            .filter(|s| s.mentor.is_none() && wanted.contains(&s.id))
        {
            student.mentor = Some(mentor_id);
            matched += 1;
        }

        Ok(BulkAssignResult {
            acknowledged: true,
            matched_count: matched,
            modified_count: matched,
        })
    }
}
