//! Repository for the `planets` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planet::{CreatePlanet, Planet};

const COLUMNS: &str = "id, name, climate, terrain, population, diameter";

pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a planet, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, climate, terrain, population, diameter)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.climate)
            .bind(&input.terrain)
            .bind(input.population)
            .bind(input.diameter)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = ?");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every planet, unpaginated.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }
}
