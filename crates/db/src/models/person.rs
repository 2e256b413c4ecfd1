//! Person catalog entry.

use holonet_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `people` table. Every column is public.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub height: i64,
    pub mass: i64,
}

#[derive(Debug)]
pub struct CreatePerson {
    pub name: String,
    pub height: i64,
    pub mass: i64,
}
