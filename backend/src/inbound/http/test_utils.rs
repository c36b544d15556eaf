//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{LeagueStatsQuery, StoreKind};
use crate::domain::{LeagueStatsService, Season};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryLeagueRepository;

/// Season of the bundled dataset.
pub const SEASON: &str = "2025";

/// State wrapping an arbitrary stats port, defaulting to [`SEASON`].
pub fn state_with(stats: Arc<dyn LeagueStatsQuery>) -> HttpState {
    let season = Season::new(SEASON).expect("valid season");
    HttpState::new(stats, season, StoreKind::Memory)
}

/// State backed by the bundled National season held in memory.
pub fn bundled_state() -> HttpState {
    let store = InMemoryLeagueRepository::bundled().expect("bundled dataset loads");
    state_with(Arc::new(LeagueStatsService::new(Arc::new(store), "National")))
}

/// App serving every statistics route under `/api/v1`.
pub fn stats_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .service(super::national::national_scorers)
            .service(super::national::national_assists)
            .service(super::national::national_standings)
            .service(super::clubs::club_scorers)
            .service(super::clubs::club_assists)
            .service(super::clubs::club_matches)
            .service(super::clubs::club_form),
    )
}
