use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AssociationError;
use crate::models::{BulkAssignResult, CreateMentor, CreateStudent, Mentor, Student};
use crate::store::RecordStore;

/// What a student's mentor reference resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum MentorAssignment {
    Unassigned,
    Assigned(Mentor),
}

/// Rules for linking students to mentors, on top of an injected record store.
///
/// The store does not enforce that a student's mentor reference names an
/// existing mentor. When `strict_references` is set, the service checks it
/// before writing; otherwise any well-formed id is accepted, and a dangling
/// reference reads back as unassigned.
#[derive(Clone)]
pub struct AssociationService {
    store: Arc<dyn RecordStore>,
    strict_references: bool,
}

impl AssociationService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            strict_references: false,
        }
    }

    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }

    pub async fn create_mentor(&self, fields: CreateMentor) -> Result<Mentor, AssociationError> {
        let mentor = self
            .store
            .insert_mentor(fields)
            .await
            .map_err(AssociationError::store)?;
        info!("Created mentor {}", mentor.id);
        Ok(mentor)
    }

    pub async fn create_student(&self, fields: CreateStudent) -> Result<Student, AssociationError> {
        let student = self
            .store
            .insert_student(fields)
            .await
            .map_err(AssociationError::store)?;
        info!("Created student {}", student.id);
        Ok(student)
    }

    /// Overwrite the student's mentor, whatever it was before.
    pub async fn set_student_mentor(
        &self,
        student_id: Uuid,
        mentor_id: Uuid,
    ) -> Result<Student, AssociationError> {
        self.check_mentor_reference(mentor_id).await?;

        let student = self
            .store
            .set_student_mentor(student_id, mentor_id)
            .await
            .map_err(AssociationError::store)?
            .ok_or_else(|| AssociationError::student_not_found(student_id.to_string()))?;

        info!("Assigned mentor {} to student {}", mentor_id, student_id);
        Ok(student)
    }

    /// Attach every listed student that has no mentor yet. Students that
    /// already have one, and ids that match nothing, are left alone.
    pub async fn bulk_assign_students(
        &self,
        mentor_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<BulkAssignResult, AssociationError> {
        self.check_mentor_reference(mentor_id).await?;

        if student_ids.is_empty() {
            debug!("Bulk assignment to mentor {} with no student ids", mentor_id);
            return Ok(BulkAssignResult::empty());
        }

        let result = self
            .store
            .assign_unassigned_students(mentor_id, student_ids)
            .await
            .map_err(AssociationError::store)?;

        info!(
            "Bulk assigned {} of {} students to mentor {}",
            result.modified_count,
            student_ids.len(),
            mentor_id
        );
        Ok(result)
    }

    pub async fn list_students_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<Student>, AssociationError> {
        self.store
            .find_students_by_mentor(mentor_id)
            .await
            .map_err(AssociationError::store)
    }

    pub async fn get_mentor_of_student(&self, student_id: Uuid) -> Result<MentorAssignment, AssociationError> {
        let student = self
            .store
            .find_student(student_id)
            .await
            .map_err(AssociationError::store)?
            .ok_or_else(|| AssociationError::student_not_found(student_id.to_string()))?;

        let Some(mentor_id) = student.mentor else {
            return Ok(MentorAssignment::Unassigned);
        };

        match self
            .store
            .find_mentor(mentor_id)
            .await
            .map_err(AssociationError::store)?
        {
            Some(mentor) => Ok(MentorAssignment::Assigned(mentor)),
            None => {
                warn!("Student {} references missing mentor {}", student_id, mentor_id);
                Ok(MentorAssignment::Unassigned)
            }
        }
    }

    pub async fn list_all_students(&self) -> Result<Vec<Student>, AssociationError> {
        self.store.list_students().await.map_err(AssociationError::store)
    }

    pub async fn list_all_mentors(&self) -> Result<Vec<Mentor>, AssociationError> {
        self.store.list_mentors().await.map_err(AssociationError::store)
    }

    async fn check_mentor_reference(&self, mentor_id: Uuid) -> Result<(), AssociationError> {
        if !self.strict_references {
            return Ok(());
        }

        match self
            .store
            .find_mentor(mentor_id)
            .await
            .map_err(AssociationError::store)?
        {
            Some(_) => Ok(()),
            None => Err(AssociationError::invalid_reference(mentor_id.to_string())),
        }
    }
}

/// Parse a student id taken from a request. A malformed id cannot name any
/// student, so it is reported the same way as an unknown one.
pub fn parse_student_id(raw: &str) -> Result<Uuid, AssociationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AssociationError::student_not_found(raw))
}

/// Parse a mentor id taken from a request.
pub fn parse_mentor_id(raw: &str) -> Result<Uuid, AssociationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AssociationError::invalid_reference(raw))
}
