//! Record store primitives the association service is built on.
//!
//! Each method is a single store operation and is atomic on its own. No
//! operation spans more than one record except
//! [`RecordStore::assign_unassigned_students`], which behaves like a
//! filtered update-many: every matching record is updated, and the call as
//! a whole is one statement.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::config::{Config, StoreBackend};
use crate::db::Database;
use crate::models::{BulkAssignResult, CreateMentor, CreateStudent, Mentor, Student};

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_mentor(&self, fields: CreateMentor) -> Result<Mentor>;
    async fn insert_student(&self, fields: CreateStudent) -> Result<Student>;

    async fn find_mentor(&self, id: Uuid) -> Result<Option<Mentor>>;
    async fn find_student(&self, id: Uuid) -> Result<Option<Student>>;

    /// All mentors in insertion order.
    async fn list_mentors(&self) -> Result<Vec<Mentor>>;
    /// All students in insertion order.
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn find_students_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Student>>;

    /// Overwrite a student's mentor. `None` when the student does not exist.
    async fn set_student_mentor(&self, student_id: Uuid, mentor_id: Uuid) -> Result<Option<Student>>;

    /// Set `mentor_id` on every listed student whose mentor is unset.
    async fn assign_unassigned_students(
        &self,
        mentor_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<BulkAssignResult>;
}

/// Build the store selected by configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn RecordStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let db = Database::new_with_pool_config(
                &config.database_url,
                config.db_max_connections,
                config.db_min_connections,
            )
            .await?;
            db.migrate().await?;
            info!("Connected to Postgres record store");
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            info!("Using in-memory record store; records are lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
