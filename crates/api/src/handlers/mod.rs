//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers read through the repositories in `holonet_db`, perform at most
//! one write, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
