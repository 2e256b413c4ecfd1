use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// It is the only context handlers receive; there are no globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holonet_db::DbPool,
    /// Server configuration, including the token signing secret.
    pub config: Arc<ServerConfig>,
}
