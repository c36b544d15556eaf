//! Backend entry-point: opens the record store and serves the statistics API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fcsmtop::domain::LeagueStatsService;
use fcsmtop::domain::ports::{LeagueStatsQuery, StoreKind};
use fcsmtop::inbound::http::health::HealthState;
use fcsmtop::inbound::http::state::HttpState;
use fcsmtop::outbound::memory::InMemoryLeagueRepository;
use fcsmtop::outbound::persistence::{
    DbPool, DieselLeagueRepository, DieselLeagueSeedRepository, PoolConfig, run_migrations,
};
use fcsmtop::seeding::{load_dataset, seed_store};
use fcsmtop::settings::AppSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|e| io::Error::other(format!("configuration error: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let default_season = settings.default_season().map_err(io::Error::other)?;
    let league = settings.league().map_err(io::Error::other)?.to_owned();
    let focus_club = settings.focus_club().map_err(io::Error::other)?;

    let (stats, store) = match settings.database_url() {
        Some(url) => (open_postgres(&settings, url, &league).await?, StoreKind::Postgresql),
        None => (open_memory(&settings, &league)?, StoreKind::Memory),
    };

    let config = ServerConfig::new(bind_addr, HttpState::new(stats, default_season, store));
    info!(
        addr = %config.bind_addr(),
        db = store.as_str(),
        %league,
        focus = focus_club.as_str(),
        "starting server"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

async fn open_postgres(
    settings: &AppSettings,
    url: &str,
    league: &str,
) -> io::Result<Arc<dyn LeagueStatsQuery>> {
    run_migrations(url).await.map_err(io::Error::other)?;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
        .await
        .map_err(|e| io::Error::other(format!("database pool: {e}")))?;

    if settings.seed_on_startup() {
        let dataset = load_dataset(settings.seed_path.as_deref()).map_err(io::Error::other)?;
        seed_store(&DieselLeagueSeedRepository::new(pool.clone()), &dataset)
            .await
            .map_err(io::Error::other)?;
    }

    let repo = DieselLeagueRepository::new(pool);
    Ok(Arc::new(LeagueStatsService::new(Arc::new(repo), league)))
}

fn open_memory(settings: &AppSettings, league: &str) -> io::Result<Arc<dyn LeagueStatsQuery>> {
    let dataset = load_dataset(settings.seed_path.as_deref()).map_err(io::Error::other)?;
    let repo = InMemoryLeagueRepository::from_dataset(&dataset).map_err(io::Error::other)?;
    Ok(Arc::new(LeagueStatsService::new(Arc::new(repo), league)))
}
