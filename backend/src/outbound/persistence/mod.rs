//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories run on `diesel-async` connections pooled by `bb8`. Row
//! structs and the schema stay private to this module; callers only see
//! domain records and port errors.

mod diesel_error_mapping;
mod diesel_league_repository;
mod diesel_league_seed_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_league_repository::DieselLeagueRepository;
pub use diesel_league_seed_repository::DieselLeagueSeedRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
