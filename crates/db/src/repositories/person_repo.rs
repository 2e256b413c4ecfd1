//! Repository for the `people` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, name, height, mass";

pub struct PersonRepo;

impl PersonRepo {
    /// Insert a person, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (name, height, mass)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.height)
            .bind(input.mass)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = ?");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every person, unpaginated.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }
}
