//! Process configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, `FCSMTOP_*` environment variables and
//! command-line flags (`--bind-addr`, `--database-url`, ...).

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::domain::{Season, SeasonError, TeamCode, TeamCodeError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LEAGUE: &str = "National";
const DEFAULT_SEASON: &str = "2025";
const DEFAULT_FOCUS_CLUB: &str = "FCSM";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_SEED_ON_STARTUP: bool = true;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {message}")]
    BindAddr { value: String, message: String },
    #[error("invalid default season: {0}")]
    Season(#[from] SeasonError),
    #[error("invalid focus club: {0}")]
    FocusClub(#[from] TeamCodeError),
    #[error("league name must not be empty")]
    EmptyLeague,
}

/// Configuration of the `fcsmtop-api` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FCSMTOP")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. The bundled season is served from memory when absent.
    pub database_url: Option<String>,
    /// League whose teams appear in the standings.
    pub league: Option<String>,
    /// Season used when a request omits `season`.
    #[serde(default, deserialize_with = "text_or_number")]
    pub default_season: Option<String>,
    /// Club highlighted by the viewer.
    #[serde(default, deserialize_with = "text_or_number")]
    pub focus_club: Option<String>,
    /// Seed an empty PostgreSQL store at startup. Defaults to `true`.
    pub seed_on_startup: Option<bool>,
    /// Dataset file to seed from instead of the bundled season.
    pub seed_path: Option<PathBuf>,
    /// Upper bound of the connection pool.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// # Errors
    /// Returns [`SettingsError::EmptyLeague`] for a blank league name.
    pub fn league(&self) -> Result<&str, SettingsError> {
        let league = self.league.as_deref().unwrap_or(DEFAULT_LEAGUE).trim();
        if league.is_empty() {
            return Err(SettingsError::EmptyLeague);
        }
        Ok(league)
    }

    /// # Errors
    /// Returns [`SettingsError::Season`] for a malformed season label.
    pub fn default_season(&self) -> Result<Season, SettingsError> {
        Ok(Season::new(
            self.default_season.as_deref().unwrap_or(DEFAULT_SEASON),
        )?)
    }

    /// # Errors
    /// Returns [`SettingsError::FocusClub`] for a malformed club code.
    pub fn focus_club(&self) -> Result<TeamCode, SettingsError> {
        Ok(TeamCode::new(
            self.focus_club.as_deref().unwrap_or(DEFAULT_FOCUS_CLUB),
        )?)
    }

    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(DEFAULT_SEED_ON_STARTUP)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }
}

/// Environment values such as `2024` arrive as integers; keep them as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Signed(value) => value.to_string(),
        Raw::Unsigned(value) => value.to_string(),
    }))
}
