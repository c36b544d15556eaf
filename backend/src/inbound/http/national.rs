//! League-wide statistics endpoints.
//!
//! ```text
//! GET /api/v1/national/buteurs
//! GET /api/v1/national/passeurs
//! GET /api/v1/national/classement
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::params::{LeagueTableQuery, SeasonQuery};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::stats_dto::{AssistResponse, ScorerResponse, StandingResponse};

/// Top scorers of the league.
#[utoipa::path(
    get,
    path = "/api/v1/national/buteurs",
    params(LeagueTableQuery),
    responses(
        (status = 200, description = "Scorer table", body = [ScorerResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["national"],
    operation_id = "listNationalScorers"
)]
#[get("/national/buteurs")]
pub async fn national_scorers(
    state: web::Data<HttpState>,
    query: web::Query<LeagueTableQuery>,
) -> ApiResult<web::Json<Vec<ScorerResponse>>> {
    let (season, limit) = query.resolve(&state.default_season)?;
    let rows = state.stats.national_scorers(&season, limit).await?;
    Ok(web::Json(rows.into_iter().map(ScorerResponse::from).collect()))
}

/// Top assist providers of the league.
#[utoipa::path(
    get,
    path = "/api/v1/national/passeurs",
    params(LeagueTableQuery),
    responses(
        (status = 200, description = "Assist table", body = [AssistResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["national"],
    operation_id = "listNationalAssists"
)]
#[get("/national/passeurs")]
pub async fn national_assists(
    state: web::Data<HttpState>,
    query: web::Query<LeagueTableQuery>,
) -> ApiResult<web::Json<Vec<AssistResponse>>> {
    let (season, limit) = query.resolve(&state.default_season)?;
    let rows = state.stats.national_assists(&season, limit).await?;
    Ok(web::Json(rows.into_iter().map(AssistResponse::from).collect()))
}

/// League table.
#[utoipa::path(
    get,
    path = "/api/v1/national/classement",
    params(SeasonQuery),
    responses(
        (status = 200, description = "Standings", body = [StandingResponse]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Record store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["national"],
    operation_id = "getNationalStandings"
)]
#[get("/national/classement")]
pub async fn national_standings(
    state: web::Data<HttpState>,
    query: web::Query<SeasonQuery>,
) -> ApiResult<web::Json<Vec<StandingResponse>>> {
    let season = query.resolve(&state.default_season)?;
    let rows = state.stats.standings(&season).await?;
    Ok(web::Json(rows.into_iter().map(StandingResponse::from).collect()))
}

#[cfg(test)]
#[path = "national_tests.rs"]
mod tests;
