//! Handlers for the `/people` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_db::models::person::{CreatePerson, Person};
use holonet_db::repositories::PersonRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{invalid_fields_message, IdPath, ValidatedJson};
use crate::state::AppState;

/// Request body for `POST /people`.
///
/// `height` and `mass` may be any integer except zero, which counts as
/// missing. Negative values are stored as given.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub height: Option<i64>,
    #[validate(required)]
    pub mass: Option<i64>,
}

impl TryFrom<CreatePersonRequest> for CreatePerson {
    type Error = AppError;

    fn try_from(input: CreatePersonRequest) -> Result<Self, Self::Error> {
        let zeroed: Vec<&str> = [("height", input.height), ("mass", input.mass)]
            .into_iter()
            .filter(|(_, value)| *value == Some(0))
            .map(|(field, _)| field)
            .collect();
        if !zeroed.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                invalid_fields_message(zeroed),
            )));
        }

        match (input.name, input.height, input.mass) {
            (Some(name), Some(height), Some(mass)) => Ok(CreatePerson { name, height, mass }),
            _ => Err(AppError::Core(CoreError::Validation(
                "Name, height and mass are required".into(),
            ))),
        }
    }
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let input = CreatePerson::try_from(input)?;
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Person", id)))?;
    Ok(Json(person))
}
