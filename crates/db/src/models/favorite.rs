//! Favorite link model and DTOs.

use holonet_core::error::CoreError;
use holonet_core::favorite::FavoriteTarget;
use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::person::Person;
use crate::models::planet::PlanetResponse;

/// Raw row from the `favorites` table.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteRow {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: Option<DbId>,
    pub people_id: Option<DbId>,
}

/// A favorite with its target resolved to a single catalog reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub target: FavoriteTarget,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = CoreError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            target: FavoriteTarget::from_columns(row.planet_id, row.people_id)?,
        })
    }
}

/// A favorite joined with whichever catalog entry it points at.
///
/// Produced by a LEFT JOIN, so the `planet_*` / `person_*` columns are all
/// `NULL` for the side that is not referenced.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteDetailRow {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_ref: Option<DbId>,
    pub planet_name: Option<String>,
    pub planet_climate: Option<String>,
    pub planet_population: Option<i64>,
    pub person_ref: Option<DbId>,
    pub person_name: Option<String>,
    pub person_height: Option<i64>,
    pub person_mass: Option<i64>,
}

/// Client-facing favorite with the referenced entry inlined.
///
/// `planet` is `null` unless the favorite references an existing planet;
/// `people` likewise for persons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub planet: Option<PlanetResponse>,
    pub people: Option<Person>,
}

impl From<FavoriteDetailRow> for FavoriteResponse {
    fn from(row: FavoriteDetailRow) -> Self {
        let planet = match (row.planet_ref, row.planet_name, row.planet_climate) {
            (Some(id), Some(name), Some(climate)) => Some(PlanetResponse {
                id,
                name,
                climate,
                population: row.planet_population.unwrap_or_default(),
            }),
            _ => None,
        };

        let people = match (row.person_ref, row.person_name) {
            (Some(id), Some(name)) => Some(Person {
                id,
                name,
                height: row.person_height.unwrap_or_default(),
                mass: row.person_mass.unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            user_id: row.user_id,
            planet,
            people,
        }
    }
}
