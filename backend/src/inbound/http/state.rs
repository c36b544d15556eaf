//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the [`LeagueStatsQuery`] port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::Season;
use crate::domain::ports::{LeagueStatsQuery, StoreKind};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub stats: Arc<dyn LeagueStatsQuery>,
    /// Season used when a request omits `season`.
    pub default_season: Season,
    /// Record store backing `stats`, reported by `/health`.
    pub store: StoreKind,
}

impl HttpState {
    /// Construct state from the stats port and request defaults.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use fcsmtop::domain::Season;
    /// use fcsmtop::domain::ports::{FixtureLeagueStatsQuery, StoreKind};
    /// use fcsmtop::inbound::http::state::HttpState;
    ///
    /// let season = Season::new("2025").expect("valid season");
    /// let state = HttpState::new(Arc::new(FixtureLeagueStatsQuery), season, StoreKind::Memory);
    /// assert_eq!(state.default_season.as_str(), "2025");
    /// ```
    pub fn new(stats: Arc<dyn LeagueStatsQuery>, default_season: Season, store: StoreKind) -> Self {
        Self {
            stats,
            default_season,
            store,
        }
    }
}
