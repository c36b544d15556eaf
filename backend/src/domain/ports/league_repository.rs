//! Read-side port for league records.
//!
//! The aggregation engine works on a [`SeasonRecords`] snapshot. Adapters
//! assemble that snapshot in one call so every view of a request is computed
//! from a consistent set of rows.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Season, SeasonRecords, Team, TeamCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading league records.
    pub enum LeagueRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "league store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "league store query failed: {message}",
    }
}

/// Kind of record store backing the service, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    Postgresql,
}

impl StoreKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgresql => "postgresql",
        }
    }
}

/// Port for reading league records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Look a club up by its short code.
    ///
    /// Codes are normalised on construction, so the lookup is
    /// case-insensitive with respect to the caller's input.
    async fn find_team_by_code(
        &self,
        code: &TeamCode,
    ) -> Result<Option<Team>, LeagueRepositoryError>;

    /// Snapshot of every record of `season`.
    ///
    /// `teams` and `players` hold the whole registry ordered by id; the other
    /// collections hold only rows of `season`. An unknown season yields empty
    /// collections rather than an error.
    async fn season_records(&self, season: &Season) -> Result<SeasonRecords, LeagueRepositoryError>;
}

/// Fixture implementation backed by an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLeagueRepository;

#[async_trait]
impl LeagueRepository for FixtureLeagueRepository {
    async fn find_team_by_code(
        &self,
        _code: &TeamCode,
    ) -> Result<Option<Team>, LeagueRepositoryError> {
        Ok(None)
    }

    async fn season_records(
        &self,
        _season: &Season,
    ) -> Result<SeasonRecords, LeagueRepositoryError> {
        Ok(SeasonRecords::default())
    }
}
