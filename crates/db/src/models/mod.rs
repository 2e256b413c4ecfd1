//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A create DTO for inserts
//! - A `Serialize` response shape where the row itself must not be exposed

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
