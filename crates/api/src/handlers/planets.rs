//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_db::models::planet::{CreatePlanet, PlanetResponse};
use holonet_db::repositories::PlanetRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// Population stored when the request omits it.
const DEFAULT_POPULATION: i64 = 0;

/// Request body for `POST /planets`.
///
/// `terrain` is required on input even though responses never include it.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanetRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub climate: Option<String>,
    #[validate(required, length(min = 1))]
    pub terrain: Option<String>,
    pub population: Option<i64>,
    pub diameter: Option<i64>,
}

impl TryFrom<CreatePlanetRequest> for CreatePlanet {
    type Error = AppError;

    fn try_from(input: CreatePlanetRequest) -> Result<Self, Self::Error> {
        match (input.name, input.climate, input.terrain) {
            (Some(name), Some(climate), Some(terrain)) => Ok(CreatePlanet {
                name,
                climate,
                terrain,
                population: input.population.unwrap_or(DEFAULT_POPULATION),
                diameter: input.diameter,
            }),
            _ => Err(AppError::Core(CoreError::Validation(
                "Missing required fields: name, climate, terrain".into(),
            ))),
        }
    }
}

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlanetRequest>,
) -> AppResult<(StatusCode, Json<PlanetResponse>)> {
    let input = CreatePlanet::try_from(input)?;
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, "Planet created");
    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PlanetResponse>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// GET /planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<PlanetResponse>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Planet", id)))?;
    Ok(Json(planet.into()))
}
