//! Query and path parameter parsing for the statistics endpoints.
//!
//! Parameters arrive as raw strings so malformed values produce the same
//! `invalid_request` payload as out-of-range ones, with
//! `details {field, value, code}`.

use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::stats::{FORM_DEFAULT, FORM_MAX, HISTORY_DEFAULT, HISTORY_MAX};
use crate::domain::{Error, Season, TeamCode};

/// Default size of the league-wide tables.
pub const LIMIT_DEFAULT: usize = 20;
/// Largest accepted `limit`.
pub const LIMIT_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    InvalidSeason,
    InvalidInteger,
    OutOfRange,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidSeason => "invalid_season",
            Self::InvalidInteger => "invalid_integer",
            Self::OutOfRange => "out_of_range",
        }
    }
}

fn validation_error(field: &str, value: &str, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

/// Inclusive bounds for a count parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    field: &'static str,
    max: usize,
}

impl Bounds {
    fn parse(self, raw: &str) -> Result<usize, Error> {
        let message = format!("{} must be an integer between 1 and {}", self.field, self.max);
        let value: usize = raw.trim().parse().map_err(|_| {
            validation_error(self.field, raw, ValidationCode::InvalidInteger, message.clone())
        })?;
        if !(1..=self.max).contains(&value) {
            return Err(validation_error(
                self.field,
                raw,
                ValidationCode::OutOfRange,
                message,
            ));
        }
        Ok(value)
    }

    fn parse_or(self, raw: Option<&str>, default: usize) -> Result<usize, Error> {
        raw.map_or(Ok(default), |value| self.parse(value))
    }

    fn parse_optional(self, raw: Option<&str>) -> Result<Option<usize>, Error> {
        raw.map(|value| self.parse(value)).transpose()
    }
}

const LIMIT: Bounds = Bounds {
    field: "limit",
    max: LIMIT_MAX,
};

fn parse_season(raw: Option<&str>, default: &Season) -> Result<Season, Error> {
    match raw {
        None => Ok(default.clone()),
        Some(value) => Season::new(value).map_err(|err| {
            validation_error("season", value, ValidationCode::InvalidSeason, err.to_string())
        }),
    }
}

/// Resolve the `{club}` path segment.
///
/// A code that cannot name any club is reported like an unknown one.
///
/// # Errors
/// Returns a `not_found` error for malformed codes.
pub fn parse_club(raw: &str) -> Result<TeamCode, Error> {
    TeamCode::new(raw).map_err(|_| Error::not_found(format!("Club '{}' introuvable", raw.trim())))
}

/// Query string of the league-wide tables.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeagueTableQuery {
    /// Season label; defaults to the configured season.
    #[param(example = "2025")]
    pub season: Option<String>,
    /// Number of rows, 1 to 50 (default 20).
    #[param(value_type = Option<u32>, example = 20)]
    pub limit: Option<String>,
}

impl LeagueTableQuery {
    /// Validate into a season and a row limit.
    ///
    /// # Errors
    /// Returns `invalid_request` for a malformed season or limit.
    pub fn resolve(&self, default_season: &Season) -> Result<(Season, usize), Error> {
        Ok((
            parse_season(self.season.as_deref(), default_season)?,
            LIMIT.parse_or(self.limit.as_deref(), LIMIT_DEFAULT)?,
        ))
    }
}

/// Query string of the standings endpoint.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeasonQuery {
    /// Season label; defaults to the configured season.
    #[param(example = "2025")]
    pub season: Option<String>,
}

impl SeasonQuery {
    /// # Errors
    /// Returns `invalid_request` for a malformed season.
    pub fn resolve(&self, default_season: &Season) -> Result<Season, Error> {
        parse_season(self.season.as_deref(), default_season)
    }
}

/// Query string of the club scorer and assist tables.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClubTableQuery {
    /// Season label; defaults to the configured season.
    #[param(example = "2025")]
    pub season: Option<String>,
    /// Optional number of rows, 1 to 50. All rows when absent.
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
}

impl ClubTableQuery {
    /// # Errors
    /// Returns `invalid_request` for a malformed season or limit.
    pub fn resolve(&self, default_season: &Season) -> Result<(Season, Option<usize>), Error> {
        Ok((
            parse_season(self.season.as_deref(), default_season)?,
            LIMIT.parse_optional(self.limit.as_deref())?,
        ))
    }
}

/// Query string of the club match history and form endpoints.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentMatchesQuery {
    /// Season label; defaults to the configured season.
    #[param(example = "2025")]
    pub season: Option<String>,
    /// Number of most recent played matches.
    #[param(value_type = Option<u32>, example = 5)]
    pub last: Option<String>,
}

impl RecentMatchesQuery {
    fn resolve(
        &self,
        default_season: &Season,
        default_last: usize,
        max_last: usize,
    ) -> Result<(Season, usize), Error> {
        let bounds = Bounds {
            field: "last",
            max: max_last,
        };
        Ok((
            parse_season(self.season.as_deref(), default_season)?,
            bounds.parse_or(self.last.as_deref(), default_last)?,
        ))
    }

    /// Validate for the match history view (`last` 1 to 38, default 10).
    ///
    /// # Errors
    /// Returns `invalid_request` for a malformed season or count.
    pub fn resolve_history(&self, default_season: &Season) -> Result<(Season, usize), Error> {
        self.resolve(default_season, HISTORY_DEFAULT, HISTORY_MAX)
    }

    /// Validate for the form view (`last` 1 to 10, default 5).
    ///
    /// # Errors
    /// Returns `invalid_request` for a malformed season or count.
    pub fn resolve_form(&self, default_season: &Season) -> Result<(Season, usize), Error> {
        self.resolve(default_season, FORM_DEFAULT, FORM_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn season() -> Season {
        Season::new("2025").expect("valid season")
    }

    fn details_code(error: &Error) -> Option<&str> {
        error
            .details()
            .and_then(|details| details.get("code"))
            .and_then(serde_json::Value::as_str)
    }

    #[rstest]
    fn league_table_defaults(season: Season) {
        let (resolved, limit) = LeagueTableQuery::default()
            .resolve(&season)
            .expect("defaults are valid");
        assert_eq!(resolved, season);
        assert_eq!(limit, LIMIT_DEFAULT);
    }

    #[rstest]
    #[case("1", 1)]
    #[case("50", 50)]
    #[case(" 7 ", 7)]
    fn limit_accepts_bounds(season: Season, #[case] raw: &str, #[case] expected: usize) {
        let query = LeagueTableQuery {
            season: None,
            limit: Some(raw.to_owned()),
        };
        let (_, limit) = query.resolve(&season).expect("limit within bounds");
        assert_eq!(limit, expected);
    }

    #[rstest]
    #[case("0", "out_of_range")]
    #[case("51", "out_of_range")]
    #[case("-3", "invalid_integer")]
    #[case("ten", "invalid_integer")]
    fn limit_rejects_bad_values(season: Season, #[case] raw: &str, #[case] code: &str) {
        let query = LeagueTableQuery {
            season: None,
            limit: Some(raw.to_owned()),
        };
        let error = query.resolve(&season).expect_err("limit rejected");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(details_code(&error), Some(code));
        assert_eq!(
            error.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
            Some("limit")
        );
    }

    #[rstest]
    fn club_limit_is_optional(season: Season) {
        let (_, limit) = ClubTableQuery::default()
            .resolve(&season)
            .expect("defaults are valid");
        assert_eq!(limit, None);
    }

    #[rstest]
    fn explicit_season_overrides_default(season: Season) {
        let query = SeasonQuery {
            season: Some("2024".to_owned()),
        };
        let resolved = query.resolve(&season).expect("valid season");
        assert_eq!(resolved.as_str(), "2024");
    }

    #[rstest]
    fn blank_season_is_rejected(season: Season) {
        let query = SeasonQuery {
            season: Some("   ".to_owned()),
        };
        let error = query.resolve(&season).expect_err("blank season");
        assert_eq!(details_code(&error), Some("invalid_season"));
    }

    #[rstest]
    fn history_and_form_use_their_own_bounds(season: Season) {
        let defaults = RecentMatchesQuery::default();
        assert_eq!(defaults.resolve_history(&season).expect("history").1, 10);
        assert_eq!(defaults.resolve_form(&season).expect("form").1, 5);

        let wide = RecentMatchesQuery {
            season: None,
            last: Some("38".to_owned()),
        };
        assert_eq!(wide.resolve_history(&season).expect("history").1, 38);
        let error = wide.resolve_form(&season).expect_err("form caps at 10");
        assert_eq!(details_code(&error), Some("out_of_range"));
    }

    #[rstest]
    #[case("fcsm", Ok("FCSM"))]
    #[case("not a club", Err("Club 'not a club' introuvable"))]
    fn club_codes_normalise_or_miss(#[case] raw: &str, #[case] expected: Result<&str, &str>) {
        match (parse_club(raw), expected) {
            (Ok(code), Ok(want)) => assert_eq!(code.as_str(), want),
            (Err(error), Err(message)) => {
                assert_eq!(error.code(), ErrorCode::NotFound);
                assert_eq!(error.message(), message);
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }
}
