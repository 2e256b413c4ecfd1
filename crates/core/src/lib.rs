//! Domain types shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod access;
pub mod error;
pub mod favorite;
pub mod types;
