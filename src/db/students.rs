use anyhow::{Context, Result};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

use crate::models::{BulkAssignResult, CreateStudent, Student};
use super::Database;

const STUDENT_COLUMNS: &str = "id, name, primary_language, email, location, fees_paid, mentor_id";

fn student_from_row(row: &PgRow) -> Student {
    Student {
        id: row.get("id"),
        name: row.get("name"),
        primary_language: row.get("primary_language"),
        email: row.get("email"),
        location: row.get("location"),
        fees_paid: row.get("fees_paid"),
        mentor: row.get("mentor_id"),
    }
}

impl Database {
    pub async fn create_student(&self, student: CreateStudent) -> Result<Student> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO students (name, primary_language, email, location, fees_paid)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            STUDENT_COLUMNS
        ))
        .bind(&student.name)
        .bind(&student.primary_language)
        .bind(&student.email)
        .bind(&student.location)
        .bind(student.fees_paid)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert student")?;

        Ok(student_from_row(&row))
    }

    pub async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        let row = sqlx::query(&format!("SELECT {} FROM students WHERE id = $1", STUDENT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch student")?;

        Ok(row.as_ref().map(student_from_row))
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>> {
        let rows = sqlx::query(&format!("SELECT {} FROM students ORDER BY seq", STUDENT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch students")?;

        Ok(rows.iter().map(student_from_row).collect())
    }

    pub async fn get_students_by_mentor(&self, mentor_id: Uuid) -> Result<Vec<Student>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM students WHERE mentor_id = $1 ORDER BY seq",
            STUDENT_COLUMNS
        ))
        .bind(mentor_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch students for mentor")?;

        Ok(rows.iter().map(student_from_row).collect())
    }

    pub async fn update_student_mentor(&self, student_id: Uuid, mentor_id: Uuid) -> Result<Option<Student>> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE students SET mentor_id = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {}
            "#,
            STUDENT_COLUMNS
        ))
        .bind(mentor_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update student mentor")?;

        Ok(row.as_ref().map(student_from_row))
    }

    /// First-assignment-only bulk update: rows that already hold a mentor
    /// are filtered out by the statement itself, so a concurrent assignment
    /// of the same student can only succeed once.
    pub async fn assign_students_without_mentor(
        &self,
        mentor_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<BulkAssignResult> {
        if student_ids.is_empty() {
            return Ok(BulkAssignResult::empty());
        }

        let result = sqlx::query(
            r#"
            UPDATE students SET mentor_id = $1, updated_at = NOW()
            WHERE id = ANY($2) AND mentor_id IS NULL
            "#,
        )
        .bind(mentor_id)
        .bind(student_ids)
        .execute(&self.pool)
        .await
        .context("Failed to assign students to mentor")?;

        let affected = result.rows_affected();
        Ok(BulkAssignResult {
            acknowledged: true,
            matched_count: affected,
            modified_count: affected,
        })
    }
}
