//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`admin::RequireAdmin`] -- Requires the admin identity.

pub mod admin;
pub mod auth;
