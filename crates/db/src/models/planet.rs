//! Planet catalog entry.

use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `planets` table.
///
/// `terrain` and `diameter` are stored but never returned to clients; use
/// [`PlanetResponse`] for output.
#[derive(Debug, Clone, FromRow)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
    pub diameter: Option<i64>,
}

/// Public planet representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetResponse {
    pub id: DbId,
    pub name: String,
    pub climate: String,
    pub population: i64,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            population: planet.population,
        }
    }
}

/// DTO for inserting a planet. Defaults are applied by the caller.
#[derive(Debug)]
pub struct CreatePlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
    pub diameter: Option<i64>,
}
