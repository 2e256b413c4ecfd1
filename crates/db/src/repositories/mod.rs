//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every method issues exactly
//! one statement; callers compose reads and the final write explicitly.

pub mod favorite_repo;
pub mod person_repo;
pub mod planet_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use person_repo::PersonRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
