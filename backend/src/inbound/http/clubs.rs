//! Club-scoped statistics endpoints.
//!
//! ```text
//! GET /api/v1/clubs/{club}/buteurs
//! GET /api/v1/clubs/{club}/passeurs
//! GET /api/v1/clubs/{club}/matches
//! GET /api/v1/clubs/{club}/form
//! ```
//!
//! `{club}` is a short code such as `FCSM`, matched case-insensitively.

use actix_web::{get, web};
use tracing::debug;

use crate::inbound::http::ApiResult;
use crate::inbound::http::params::{ClubTableQuery, RecentMatchesQuery, parse_club};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::stats_dto::{
    AssistResponse, FormResponse, MatchResponse, ScorerResponse,
};

/// Scorers of one club.
#[utoipa::path(
    get,
    path = "/api/v1/clubs/{club}/buteurs",
    params(("club" = String, Path, description = "Club short code", example = "FCSM"), ClubTableQuery),
    responses(
        (status = 200, description = "Club scorer table", body = [ScorerResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown club", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["clubs"],
    operation_id = "listClubScorers"
)]
#[get("/clubs/{club}/buteurs")]
pub async fn club_scorers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ClubTableQuery>,
) -> ApiResult<web::Json<Vec<ScorerResponse>>> {
    let club = parse_club(&path)?;
    let (season, limit) = query.resolve(&state.default_season)?;
    let rows = state.stats.club_scorers(&club, &season, limit).await?;
    Ok(web::Json(rows.into_iter().map(ScorerResponse::from).collect()))
}

/// Assist providers of one club.
#[utoipa::path(
    get,
    path = "/api/v1/clubs/{club}/passeurs",
    params(("club" = String, Path, description = "Club short code", example = "FCSM"), ClubTableQuery),
    responses(
        (status = 200, description = "Club assist table", body = [AssistResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown club", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["clubs"],
    operation_id = "listClubAssists"
)]
#[get("/clubs/{club}/passeurs")]
pub async fn club_assists(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ClubTableQuery>,
) -> ApiResult<web::Json<Vec<AssistResponse>>> {
    let club = parse_club(&path)?;
    let (season, limit) = query.resolve(&state.default_season)?;
    let rows = state.stats.club_assists(&club, &season, limit).await?;
    Ok(web::Json(rows.into_iter().map(AssistResponse::from).collect()))
}

/// Most recent played matches of one club.
#[utoipa::path(
    get,
    path = "/api/v1/clubs/{club}/matches",
    params(("club" = String, Path, description = "Club short code", example = "FCSM"), RecentMatchesQuery),
    responses(
        (status = 200, description = "Matches, most recent first", body = [MatchResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown club", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["clubs"],
    operation_id = "listClubMatches"
)]
#[get("/clubs/{club}/matches")]
pub async fn club_matches(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<RecentMatchesQuery>,
) -> ApiResult<web::Json<Vec<MatchResponse>>> {
    let club = parse_club(&path)?;
    let (season, last) = query.resolve_history(&state.default_season)?;
    let lines = state.stats.club_matches(&club, &season, last).await?;
    Ok(web::Json(lines.into_iter().map(MatchResponse::from).collect()))
}

/// Recent form of one club.
#[utoipa::path(
    get,
    path = "/api/v1/clubs/{club}/form",
    params(("club" = String, Path, description = "Club short code", example = "FCSM"), RecentMatchesQuery),
    responses(
        (status = 200, description = "Form summary", body = FormResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown club", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema)
    ),
    tags = ["clubs"],
    operation_id = "getClubForm"
)]
#[get("/clubs/{club}/form")]
pub async fn club_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<RecentMatchesQuery>,
) -> ApiResult<web::Json<FormResponse>> {
    let club = parse_club(&path)?;
    let (season, last) = query.resolve_form(&state.default_season)?;
    let summary = state.stats.club_form(&club, &season, last).await?;
    debug!(club = %club, form = %summary.form_string, "club form computed");
    Ok(web::Json(FormResponse::from(summary)))
}

#[cfg(test)]
#[path = "clubs_tests.rs"]
mod tests;
