//! Handlers for the caller's favorite planets and people.
//!
//! Every handler takes [`AuthUser`] first so an unauthenticated request is
//! rejected before the path id is parsed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::favorite::{CatalogKind, FavoriteTarget};
use holonet_core::types::DbId;
use holonet_db::models::favorite::{Favorite, FavoriteResponse};
use holonet_db::repositories::{FavoriteRepo, PersonRepo, PlanetRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response body for a newly added favorite.
#[derive(Debug, Serialize)]
pub struct FavoriteAdded {
    pub msg: &'static str,
    pub favorite: FavoriteResponse,
}

fn already_favorited(kind: CatalogKind) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "{} already in favorites",
        kind.entity_name()
    )))
}

/// Insert the favorite, reporting a lost race on the unique index as a
/// duplicate rather than a database failure.
async fn insert_favorite(
    state: &AppState,
    user_id: DbId,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    if FavoriteRepo::find_for_user(&state.pool, user_id, target)
        .await?
        .is_some()
    {
        return Err(already_favorited(target.kind()));
    }

    let favorite = FavoriteRepo::create(&state.pool, user_id, target)
        .await
        .map_err(|e| {
            if holonet_db::is_unique_violation(&e) {
                already_favorited(target.kind())
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(
        user_id,
        favorite_id = favorite.id,
        kind = %target.kind(),
        target_id = target.id(),
        "Favorite added",
    );
    Ok(favorite)
}

/// Delete the favorite or report that none existed.
async fn delete_favorite(state: &AppState, user_id: DbId, target: FavoriteTarget) -> AppResult<()> {
    let removed = FavoriteRepo::delete_for_user(&state.pool, user_id, target).await?;
    if !removed {
        return Err(AppError::Core(CoreError::not_found("Favorite", target.id())));
    }
    tracing::info!(user_id, kind = %target.kind(), target_id = target.id(), "Favorite removed");
    Ok(())
}

/// GET /users/favorites
pub async fn list_mine(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FavoriteResponse>>> {
    let favorites = FavoriteRepo::list_detailed_for_user(&state.pool, user.user_id).await?;
    Ok(Json(favorites))
}

/// POST /favorite/planet/{id}
pub async fn add_planet(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> AppResult<(StatusCode, Json<FavoriteAdded>)> {
    let planet = PlanetRepo::find_by_id(&state.pool, planet_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Planet", planet_id)))?;

    let favorite = insert_favorite(&state, user.user_id, FavoriteTarget::Planet(planet.id)).await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            msg: "Planet added to favorites",
            favorite: FavoriteResponse {
                id: favorite.id,
                user_id: favorite.user_id,
                planet: Some(planet.into()),
                people: None,
            },
        }),
    ))
}

/// DELETE /favorite/planet/{id}
pub async fn remove_planet(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    delete_favorite(&state, user.user_id, FavoriteTarget::Planet(planet_id)).await?;
    Ok(Json(MessageResponse::new("Planet removed from favorites")))
}

/// POST /favorite/people/{id}
pub async fn add_person(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(person_id): IdPath,
) -> AppResult<(StatusCode, Json<FavoriteAdded>)> {
    let person = PersonRepo::find_by_id(&state.pool, person_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Person", person_id)))?;

    let favorite = insert_favorite(&state, user.user_id, FavoriteTarget::Person(person.id)).await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            msg: "Person added to favorites",
            favorite: FavoriteResponse {
                id: favorite.id,
                user_id: favorite.user_id,
                planet: None,
                people: Some(person),
            },
        }),
    ))
}

/// DELETE /favorite/people/{id}
pub async fn remove_person(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(person_id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    delete_favorite(&state, user.user_id, FavoriteTarget::Person(person_id)).await?;
    Ok(Json(MessageResponse::new("Person removed from favorites")))
}
