//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every statistics and health endpoint together with
//! the error schema wrappers. The document backs Swagger UI in debug builds
//! and is printed by the `openapi-dump` binary.

use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::stats_dto::{
    AssistResponse, FormResponse, MatchResponse, ScorerResponse, StandingResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "fcsmtop API",
        description = "Read-only statistics for the National league and its clubs: scorers, assists, standings, match history and form."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::national::national_scorers,
        crate::inbound::http::national::national_assists,
        crate::inbound::http::national::national_standings,
        crate::inbound::http::clubs::club_scorers,
        crate::inbound::http::clubs::club_assists,
        crate::inbound::http::clubs::club_matches,
        crate::inbound::http::clubs::club_form,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ScorerResponse,
        AssistResponse,
        StandingResponse,
        MatchResponse,
        FormResponse,
        HealthResponse
    )),
    tags(
        (name = "national", description = "League-wide tables"),
        (name = "clubs", description = "Club-scoped statistics"),
        (name = "health", description = "Status and orchestration probes")
    )
)]
pub struct ApiDoc;
