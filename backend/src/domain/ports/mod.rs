//! Domain ports.
//!
//! Driven ports ([`LeagueRepository`], [`LeagueSeedRepository`]) are
//! implemented by the outbound record store adapters. The driving port
//! ([`LeagueStatsQuery`]) is implemented by the stats service and, on the
//! command line, by the HTTP client.

mod league_repository;
mod league_seed_repository;
mod league_stats_query;
mod macros;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use league_repository::MockLeagueRepository;
pub use league_repository::{
    FixtureLeagueRepository, LeagueRepository, LeagueRepositoryError, StoreKind,
};
#[cfg(test)]
pub use league_seed_repository::MockLeagueSeedRepository;
pub use league_seed_repository::{LeagueSeedRepository, LeagueSeedRepositoryError, SeedingResult};
#[cfg(test)]
pub use league_stats_query::MockLeagueStatsQuery;
pub use league_stats_query::{FixtureLeagueStatsQuery, LeagueStatsQuery};
