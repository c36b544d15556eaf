//! Driving port for league statistics.
//!
//! Inbound adapters (the HTTP API and the command-line viewer) ask for
//! ranked views through this port without knowing which record store or
//! transport sits behind it.

use async_trait::async_trait;

use crate::domain::stats::{AssistRow, FormSummary, MatchLine, ScorerRow, StandingRow};
use crate::domain::{Error, Season, TeamCode};

/// Read-only statistics queries.
///
/// Limits arrive already validated; implementations do not clamp them.
/// Club-scoped queries fail with [`ErrorCode::NotFound`] when the club code
/// is unknown.
///
/// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
///
/// # Examples
///
/// ```rust,no_run
/// use fcsmtop::domain::ports::{FixtureLeagueStatsQuery, LeagueStatsQuery};
/// use fcsmtop::domain::Season;
///
/// # async fn example() -> Result<(), fcsmtop::domain::Error> {
/// let season = Season::new("2025").expect("valid season");
/// let rows = FixtureLeagueStatsQuery.standings(&season).await?;
/// assert!(rows.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeagueStatsQuery: Send + Sync {
    /// League-wide scorer table.
    async fn national_scorers(&self, season: &Season, limit: usize)
    -> Result<Vec<ScorerRow>, Error>;

    /// League-wide assist table.
    async fn national_assists(&self, season: &Season, limit: usize)
    -> Result<Vec<AssistRow>, Error>;

    /// League table for the configured league.
    async fn standings(&self, season: &Season) -> Result<Vec<StandingRow>, Error>;

    /// Scorer table restricted to one club.
    async fn club_scorers(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<ScorerRow>, Error>;

    /// Assist table restricted to one club.
    async fn club_assists(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<AssistRow>, Error>;

    /// The club's last `last` played matches, most recent first.
    async fn club_matches(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<Vec<MatchLine>, Error>;

    /// Form summary over the club's last `last` played matches.
    async fn club_form(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<FormSummary, Error>;
}

/// Fixture query backed by an empty league.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLeagueStatsQuery;

fn unknown_club(club: &TeamCode) -> Error {
    Error::not_found(format!("Club '{club}' introuvable"))
}

#[async_trait]
impl LeagueStatsQuery for FixtureLeagueStatsQuery {
    async fn national_scorers(
        &self,
        _season: &Season,
        _limit: usize,
    ) -> Result<Vec<ScorerRow>, Error> {
        Ok(Vec::new())
    }

    async fn national_assists(
        &self,
        _season: &Season,
        _limit: usize,
    ) -> Result<Vec<AssistRow>, Error> {
        Ok(Vec::new())
    }

    async fn standings(&self, _season: &Season) -> Result<Vec<StandingRow>, Error> {
        Ok(Vec::new())
    }

    async fn club_scorers(
        &self,
        club: &TeamCode,
        _season: &Season,
        _limit: Option<usize>,
    ) -> Result<Vec<ScorerRow>, Error> {
        Err(unknown_club(club))
    }

    async fn club_assists(
        &self,
        club: &TeamCode,
        _season: &Season,
        _limit: Option<usize>,
    ) -> Result<Vec<AssistRow>, Error> {
        Err(unknown_club(club))
    }

    async fn club_matches(
        &self,
        club: &TeamCode,
        _season: &Season,
        _last: usize,
    ) -> Result<Vec<MatchLine>, Error> {
        Err(unknown_club(club))
    }

    async fn club_form(
        &self,
        club: &TeamCode,
        _season: &Season,
        _last: usize,
    ) -> Result<FormSummary, Error> {
        Err(unknown_club(club))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_league_is_empty() {
        let season = Season::new("2025").expect("valid season");
        let query = FixtureLeagueStatsQuery;
        assert!(query.national_scorers(&season, 20).await.expect("scorers").is_empty());
        assert!(query.standings(&season).await.expect("standings").is_empty());
    }

    #[tokio::test]
    async fn fixture_club_queries_report_not_found() {
        let season = Season::new("2025").expect("valid season");
        let club = TeamCode::new("FCSM").expect("valid code");
        let error = FixtureLeagueStatsQuery
            .club_form(&club, &season, 5)
            .await
            .expect_err("unknown club");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Club 'FCSM' introuvable");
    }
}
