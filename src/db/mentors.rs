use anyhow::{Context, Result};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

use crate::models::{CreateMentor, Mentor};
use super::Database;

const MENTOR_COLUMNS: &str = "id, name, domain, email, location, experience";

fn mentor_from_row(row: &PgRow) -> Mentor {
    Mentor {
        id: row.get("id"),
        name: row.get("name"),
        domain: row.get("domain"),
        email: row.get("email"),
        location: row.get("location"),
        experience: row.get("experience"),
    }
}

impl Database {
    pub async fn create_mentor(&self, mentor: CreateMentor) -> Result<Mentor> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO mentors (name, domain, email, location, experience)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            MENTOR_COLUMNS
        ))
        .bind(&mentor.name)
        .bind(&mentor.domain)
        .bind(&mentor.email)
        .bind(&mentor.location)
        .bind(&mentor.experience)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert mentor")?;

        Ok(mentor_from_row(&row))
    }

    pub async fn get_mentor_by_id(&self, id: Uuid) -> Result<Option<Mentor>> {
        let row = sqlx::query(&format!("SELECT {} FROM mentors WHERE id = $1", MENTOR_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch mentor")?;

        Ok(row.as_ref().map(mentor_from_row))
    }

    pub async fn get_all_mentors(&self) -> Result<Vec<Mentor>> {
        let rows = sqlx::query(&format!("SELECT {} FROM mentors ORDER BY seq", MENTOR_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch mentors")?;

        Ok(rows.iter().map(mentor_from_row).collect())
    }
}
