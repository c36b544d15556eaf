//! Command-line arguments of the `fcsmtop` viewer.

use clap::{Args, Parser, Subcommand};

use crate::domain::stats::{FORM_DEFAULT, FORM_MAX, HISTORY_DEFAULT, HISTORY_MAX};
use crate::domain::{Season, TeamCode};
use crate::inbound::http::params::{LIMIT_MAX, parse_club};

use super::CliError;

/// Base URL used when `--api` is omitted.
pub const DEFAULT_API: &str = "http://localhost:8000/api/v1";
const DEFAULT_SEASON: &str = "2025";
const DEFAULT_CLUB: &str = "FCSM";

/// `fcsmtop` arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fcsmtop",
    about = "Statistiques du Championnat National et du FCSM",
    version
)]
pub struct Cli {
    /// Base URL of the statistics API.
    #[arg(long, global = true, value_name = "url", default_value = DEFAULT_API)]
    pub api: String,
    /// Read the bundled season in process instead of calling the API.
    #[arg(long, global = true)]
    pub local: bool,
    /// Log requests and store activity to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// Viewer subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Top scorers, league-wide or for one club.
    #[command(visible_alias = "buteurs")]
    Scorers(RankingArgs),
    /// Top assist providers, league-wide or for one club.
    #[command(visible_alias = "passeurs")]
    Assists(RankingArgs),
    /// League table.
    #[command(visible_alias = "classement")]
    Standings(StandingsArgs),
    /// A club's latest matches.
    Matches(MatchesArgs),
    /// A club's recent form.
    Form(FormArgs),
}

/// Options shared by the scorer and assist tables.
#[derive(Debug, Clone, Args)]
pub struct RankingArgs {
    /// League name; only `national` is served.
    #[arg(long, short = 'l')]
    pub league: Option<String>,
    /// Club short code, e.g. `FCSM`.
    #[arg(long, short = 'c')]
    pub club: Option<String>,
    #[arg(long, short = 's', default_value = DEFAULT_SEASON)]
    pub season: String,
    /// Number of rows.
    #[arg(
        long,
        short = 'n',
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=LIMIT_MAX as i64)
    )]
    pub top: u16,
}

#[derive(Debug, Clone, Args)]
pub struct StandingsArgs {
    #[arg(long, short = 's', default_value = DEFAULT_SEASON)]
    pub season: String,
    /// Club whose row is marked with `*`.
    #[arg(long, default_value = DEFAULT_CLUB)]
    pub focus: String,
}

#[derive(Debug, Clone, Args)]
pub struct MatchesArgs {
    #[arg(long, short = 'c', default_value = DEFAULT_CLUB)]
    pub club: String,
    #[arg(long, short = 's', default_value = DEFAULT_SEASON)]
    pub season: String,
    /// Number of matches, most recent first.
    #[arg(
        long,
        short = 'n',
        default_value_t = HISTORY_DEFAULT as u16,
        value_parser = clap::value_parser!(u16).range(1..=HISTORY_MAX as i64)
    )]
    pub last: u16,
}

#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    #[arg(long, short = 'c', default_value = DEFAULT_CLUB)]
    pub club: String,
    #[arg(long, short = 's', default_value = DEFAULT_SEASON)]
    pub season: String,
    /// Number of matches in the summary.
    #[arg(
        long,
        short = 'n',
        default_value_t = FORM_DEFAULT as u16,
        value_parser = clap::value_parser!(u16).range(1..=FORM_MAX as i64)
    )]
    pub last: u16,
}

/// Which table a ranking command asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    National,
    Club(TeamCode),
}

impl RankingArgs {
    /// `--club` wins over `--league`; without either there is nothing to show.
    ///
    /// # Errors
    /// [`CliError::MissingScope`] when neither selects a table, and
    /// [`CliError::Api`] with a not-found error for a malformed club code.
    pub fn scope(&self) -> Result<Scope, CliError> {
        if let Some(club) = &self.club {
            return Ok(Scope::Club(parse_club(club)?));
        }
        match self.league.as_deref() {
            Some(league) if league.trim().eq_ignore_ascii_case("national") => Ok(Scope::National),
            _ => Err(CliError::MissingScope),
        }
    }

    /// Like [`RankingArgs::scope`], but anything short of `--club` reads as
    /// the national table.
    ///
    /// # Errors
    /// [`CliError::Api`] with a not-found error for a malformed club code.
    pub fn scope_or_national(&self) -> Result<Scope, CliError> {
        match &self.club {
            Some(club) => Ok(Scope::Club(parse_club(club)?)),
            None => Ok(Scope::National),
        }
    }
}

/// Parse a season label given on the command line.
///
/// # Errors
/// [`CliError::Season`] when the label is blank or too long.
pub fn season(raw: &str) -> Result<Season, CliError> {
    Ok(Season::new(raw)?)
}

/// Parse a club code given on the command line.
///
/// # Errors
/// [`CliError::Api`] with the same not-found error the server reports.
pub fn club(raw: &str) -> Result<TeamCode, CliError> {
    Ok(parse_club(raw)?)
}
