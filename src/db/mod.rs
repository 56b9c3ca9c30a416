use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use uuid::Uuid;

use crate::models::{BulkAssignResult, CreateMentor, CreateStudent, Mentor, Student};
use crate::store::RecordStore;

pub mod mentors;
pub mod students;

/// Postgres-backed record store. Cloning shares the pool.
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new_with_pool_config(database_url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .min_connections(min_connections)
            .connect(database_url)
            .await
            .context("Failed to connect to Postgres")?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        let migrations = sqlx::migrate!("./migrations");
        for migration in migrations.migrations.iter() {
            tracing::debug!("Migration available: {} - {}", migration.version, migration.description);
        }
        migrations.run(&self.pool).await.context("Failed to run migrations")?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn insert_mentor(&self, fields: CreateMentor) -> Result<Mentor> {
        self.create_mentor(fields).await
    }

    async fn insert_student(&self, fields: CreateStudent) -> Result<Student> {
        self.create_student(fields).await
    }

    async fn find_mentor(&self, id: Uuid) -> Result<Option<Mentor>> {
        self.get_mentor_by_id(id).await
    }

    async fn find_student(&self, id: Uuid) -> Result<Option<Student>> {
        self.get_student_by_id(id).await
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>> {
        self.get_all_mentors().await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.get_all_students().await
    }

    async fn find_students_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Student>> {
        self.get_students_by_mentor(mentor_id).await
    }

    async fn set_student_mentor(&self, student_id: Uuid, mentor_id: Uuid) -> Result<Option<Student>> {
        self.update_student_mentor(student_id, mentor_id).await
    }

    async fn assign_unassigned_students(
        &self,
        mentor_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<BulkAssignResult> {
        self.assign_students_without_mentor(mentor_id, student_ids).await
    }
}
