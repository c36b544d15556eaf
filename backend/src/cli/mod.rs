//! `fcsmtop` companion viewer.
//!
//! Commands resolve to calls on [`LeagueStatsQuery`], answered either by the
//! HTTP API ([`client::HttpLeagueStatsClient`]) or, with `--local`, by the
//! stats service over the bundled season held in memory. Results are
//! rendered as plain-text tables.

pub mod args;
pub mod client;
pub mod render;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::LeagueStatsQuery;
use crate::domain::{LeagueStatsService, SeasonError};
use crate::outbound::memory::{BundledStoreError, InMemoryLeagueRepository};

use args::{Cli, Command, Scope};
use client::HttpLeagueStatsClient;

/// League served by the local mode.
const LOCAL_LEAGUE: &str = "National";

/// Errors reported by the viewer.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("précise --league national ou --club FCSM")]
    MissingScope,
    #[error("saison invalide : {0}")]
    Season(#[from] SeasonError),
    /// Error returned by the API or the local service.
    #[error("{0}")]
    Api(#[from] crate::domain::Error),
    #[error("client HTTP indisponible : {0}")]
    Client(#[from] reqwest::Error),
    #[error("jeu de données local illisible : {0}")]
    LocalStore(#[from] BundledStoreError),
}

/// Statistics source selected by `--api` / `--local`.
///
/// # Errors
/// Returns [`CliError`] when the HTTP client or the bundled store cannot be
/// built.
pub fn stats_source(cli: &Cli) -> Result<Arc<dyn LeagueStatsQuery>, CliError> {
    if cli.local {
        debug!("querying the bundled season in process");
        let store = InMemoryLeagueRepository::bundled()?;
        return Ok(Arc::new(LeagueStatsService::new(
            Arc::new(store),
            LOCAL_LEAGUE,
        )));
    }
    debug!(api = %cli.api, "querying the statistics API");
    Ok(Arc::new(HttpLeagueStatsClient::new(&cli.api)?))
}

/// Run one viewer command and return the rendered text.
///
/// # Errors
/// Returns [`CliError`] for invalid arguments and for errors reported by the
/// statistics source.
///
/// # Examples
/// ```no_run
/// use clap::Parser;
/// use fcsmtop::cli::{args::Cli, execute, stats_source};
///
/// # async fn example() -> Result<(), fcsmtop::cli::CliError> {
/// let cli = Cli::parse_from(["fcsmtop", "--local", "classement"]);
/// let stats = stats_source(&cli)?;
/// let text = execute(&cli.command, stats.as_ref()).await?;
/// assert!(text.contains("Classement"));
/// # Ok(())
/// # }
/// ```
pub async fn execute(command: &Command, stats: &dyn LeagueStatsQuery) -> Result<String, CliError> {
    match command {
        Command::Scorers(ranking) => {
            let season = args::season(&ranking.season)?;
            let top = usize::from(ranking.top);
            let (club, rows) = match ranking.scope()? {
                Scope::National => (None, stats.national_scorers(&season, top).await?),
                Scope::Club(code) => {
                    let rows = stats.club_scorers(&code, &season, Some(top)).await?;
                    (Some(code), rows)
                }
            };
            let title = render::scope_title("Buteurs", club.as_ref(), &season);
            Ok(render::scorers(&title, &rows))
        }
        Command::Assists(ranking) => {
            let season = args::season(&ranking.season)?;
            let top = usize::from(ranking.top);
            let (club, rows) = match ranking.scope_or_national()? {
                Scope::National => (None, stats.national_assists(&season, top).await?),
                Scope::Club(code) => {
                    let rows = stats.club_assists(&code, &season, Some(top)).await?;
                    (Some(code), rows)
                }
            };
            let title = render::scope_title("Passeurs", club.as_ref(), &season);
            Ok(render::assists(&title, &rows))
        }
        Command::Standings(standings) => {
            let season = args::season(&standings.season)?;
            let focus = args::club(&standings.focus)?;
            let rows = stats.standings(&season).await?;
            Ok(render::standings(&season, &rows, &focus))
        }
        Command::Matches(matches) => {
            let season = args::season(&matches.season)?;
            let club = args::club(&matches.club)?;
            let lines = stats
                .club_matches(&club, &season, usize::from(matches.last))
                .await?;
            Ok(render::matches(&club, &season, &lines))
        }
        Command::Form(form) => {
            let season = args::season(&form.season)?;
            let club = args::club(&form.club)?;
            let summary = stats
                .club_form(&club, &season, usize::from(form.last))
                .await?;
            Ok(render::form(&summary))
        }
    }
}
