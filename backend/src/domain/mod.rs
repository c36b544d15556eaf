//! Domain primitives, the aggregation engine and the services around it.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic error payload.
//! - League records ([`Team`], [`Player`], [`Match`], [`Goal`], [`Assist`],
//!   [`Card`]) and the [`SeasonRecords`] snapshot consumed by [`stats`].
//! - [`LeagueStatsService`]: implements the [`ports::LeagueStatsQuery`]
//!   driving port on top of a [`ports::LeagueRepository`].

pub mod error;
pub mod league;
mod league_stats_service;
pub mod ports;
pub mod stats;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::league::{
    Assist, Card, CardKind, Goal, Match, MatchId, Player, PlayerId, Season, SeasonError,
    SeasonRecords, Team, TeamCode, TeamCodeError, TeamId,
};
pub use self::league_stats_service::LeagueStatsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use fcsmtop::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Club 'XYZ' introuvable"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
