//! Repository for the `favorites` table.
//!
//! Uniqueness of `(user_id, planet_id)` and `(user_id, people_id)` is backed
//! by unique indexes, so a duplicate insert fails even when it races past the
//! caller's existence check.

use holonet_core::error::CoreError;
use holonet_core::favorite::{CatalogKind, FavoriteTarget};
use holonet_core::types::DbId;
use sqlx::SqlitePool;
use tracing::warn;

use crate::models::favorite::{Favorite, FavoriteDetailRow, FavoriteResponse, FavoriteRow};

const COLUMNS: &str = "id, user_id, planet_id, people_id";

/// Favorites joined onto their catalog entries, one row per favorite.
const DETAIL_SELECT: &str = "\
    SELECT f.id, f.user_id, \
           pl.id AS planet_ref, pl.name AS planet_name, \
           pl.climate AS planet_climate, pl.population AS planet_population, \
           pe.id AS person_ref, pe.name AS person_name, \
           pe.height AS person_height, pe.mass AS person_mass \
    FROM favorites f \
    LEFT JOIN planets pl ON pl.id = f.planet_id \
    LEFT JOIN people pe ON pe.id = f.people_id";

/// Column holding the reference for the given target kind.
fn target_column(target: FavoriteTarget) -> &'static str {
    match target.kind() {
        CatalogKind::Planet => "planet_id",
        CatalogKind::Person => "people_id",
    }
}

/// Convert a raw row, logging rows that break the single-target rule.
fn into_favorite(row: FavoriteRow) -> Result<Favorite, sqlx::Error> {
    let id = row.id;
    Favorite::try_from(row).map_err(|err: CoreError| {
        warn!(favorite_id = id, error = %err, "Malformed favorite row");
        sqlx::Error::Decode(Box::new(err))
    })
}

/// Provides create, lookup, and delete operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite linking `user_id` to `target`.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, planet_id, people_id)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(user_id)
            .bind(target.planet_id())
            .bind(target.people_id())
            .fetch_one(pool)
            .await?;
        into_favorite(row)
    }

    /// Find the caller's favorite for `target`, if any.
    pub async fn find_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let column = target_column(target);
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = ? AND {column} = ?");
        sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await?
            .map(into_favorite)
            .transpose()
    }

    /// Delete the caller's favorite for `target`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<bool, sqlx::Error> {
        let column = target_column(target);
        let query = format!("DELETE FROM favorites WHERE user_id = ? AND {column} = ?");
        let result = sqlx::query(&query)
            .bind(user_id)
            .bind(target.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the caller's favorites with the referenced planet or person
    /// inlined, oldest first.
    pub async fn list_detailed_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteResponse>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE f.user_id = ? ORDER BY f.id");
        let rows = sqlx::query_as::<_, FavoriteDetailRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FavoriteResponse::from).collect())
    }
}
