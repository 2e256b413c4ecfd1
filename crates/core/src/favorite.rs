//! The catalog entry a favorite points at.
//!
//! A favorite row carries two nullable foreign keys (`planet_id`,
//! `people_id`). Exactly one of them is set; [`FavoriteTarget`] is the typed
//! form of that pair and the only shape the rest of the system passes around.

use std::fmt;

use crate::error::CoreError;
use crate::types::DbId;

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Planet,
    Person,
}

impl CatalogKind {
    /// Entity name used in error messages (`"Planet"`, `"Person"`).
    pub fn entity_name(self) -> &'static str {
        match self {
            CatalogKind::Planet => "Planet",
            CatalogKind::Person => "Person",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Planet => f.write_str("planet"),
            CatalogKind::Person => f.write_str("person"),
        }
    }
}

/// The single catalog entry referenced by a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(DbId),
    Person(DbId),
}

impl FavoriteTarget {
    /// Rebuild a target from the raw `(planet_id, people_id)` column pair.
    ///
    /// Fails with [`CoreError::Internal`] when both or neither are set; the
    /// store's check constraint should make that unreachable.
    pub fn from_columns(
        planet_id: Option<DbId>,
        people_id: Option<DbId>,
    ) -> Result<Self, CoreError> {
        match (planet_id, people_id) {
            (Some(id), None) => Ok(FavoriteTarget::Planet(id)),
            (None, Some(id)) => Ok(FavoriteTarget::Person(id)),
            (planet, people) => Err(CoreError::Internal(format!(
                "favorite must reference exactly one target \
                 (planet_id={planet:?}, people_id={people:?})"
            ))),
        }
    }

    pub fn kind(self) -> CatalogKind {
        match self {
            FavoriteTarget::Planet(_) => CatalogKind::Planet,
            FavoriteTarget::Person(_) => CatalogKind::Person,
        }
    }

    /// Id of the referenced catalog entry.
    pub fn id(self) -> DbId {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => id,
        }
    }

    /// Value for the `planet_id` column.
    pub fn planet_id(self) -> Option<DbId> {
        match self {
            FavoriteTarget::Planet(id) => Some(id),
            FavoriteTarget::Person(_) => None,
        }
    }

    /// Value for the `people_id` column.
    pub fn people_id(self) -> Option<DbId> {
        match self {
            FavoriteTarget::Person(id) => Some(id),
            FavoriteTarget::Planet(_) => None,
        }
    }
}
