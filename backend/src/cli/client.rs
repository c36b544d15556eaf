//! HTTP client for the statistics API.
//!
//! [`HttpLeagueStatsClient`] implements the same driving port as the
//! in-process service, so the viewer renders API and local results through
//! one code path. Error bodies are decoded back into [`Error`] values.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::LeagueStatsQuery;
use crate::domain::stats::{AssistRow, FormSummary, MatchLine, ScorerRow, StandingRow};
use crate::domain::{Error, Season, TeamCode};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Statistics API reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLeagueStatsClient {
    client: Client,
    base_url: String,
}

impl HttpLeagueStatsClient {
    /// Client for the API rooted at `base_url`, e.g. `http://localhost:8000/api/v1`.
    ///
    /// # Errors
    /// Returns the underlying [`reqwest::Error`] when the TLS backend cannot
    /// be initialised.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("fcsmtop/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!(%url, ?query, "calling statistics API");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.transport_error(&err))?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|err| {
                Error::internal(format!("réponse illisible de {url} : {err}"))
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(decode_error(status, &body))
    }

    fn transport_error(&self, err: &reqwest::Error) -> Error {
        if err.is_connect() || err.is_timeout() {
            Error::service_unavailable(format!(
                "impossible de contacter l'API ({}), lance d'abord fcsmtop-api ou utilise --local",
                self.base_url
            ))
        } else {
            Error::internal(format!("requête vers {} échouée : {err}", self.base_url))
        }
    }
}

/// Rebuild the domain error from an API error body, falling back to the
/// status line when the body is not one.
fn decode_error(status: StatusCode, body: &str) -> Error {
    if let Ok(error) = serde_json::from_str::<Error>(body) {
        return error;
    }
    let message = format!("erreur API {status}");
    match status {
        StatusCode::NOT_FOUND => Error::not_found(message),
        StatusCode::SERVICE_UNAVAILABLE => Error::service_unavailable(message),
        s if s.is_client_error() => Error::invalid_request(message),
        _ => Error::internal(message),
    }
}

fn season_param(season: &Season) -> (&'static str, String) {
    ("season", season.as_str().to_owned())
}

#[async_trait]
impl LeagueStatsQuery for HttpLeagueStatsClient {
    async fn national_scorers(
        &self,
        season: &Season,
        limit: usize,
    ) -> Result<Vec<ScorerRow>, Error> {
        self.get(
            "/national/buteurs",
            &[season_param(season), ("limit", limit.to_string())],
        )
        .await
    }

    async fn national_assists(
        &self,
        season: &Season,
        limit: usize,
    ) -> Result<Vec<AssistRow>, Error> {
        self.get(
            "/national/passeurs",
            &[season_param(season), ("limit", limit.to_string())],
        )
        .await
    }

    async fn standings(&self, season: &Season) -> Result<Vec<StandingRow>, Error> {
        self.get("/national/classement", &[season_param(season)]).await
    }

    async fn club_scorers(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<ScorerRow>, Error> {
        let mut query = vec![season_param(season)];
        query.extend(limit.map(|n| ("limit", n.to_string())));
        self.get(&format!("/clubs/{club}/buteurs"), &query).await
    }

    async fn club_assists(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<AssistRow>, Error> {
        let mut query = vec![season_param(season)];
        query.extend(limit.map(|n| ("limit", n.to_string())));
        self.get(&format!("/clubs/{club}/passeurs"), &query).await
    }

    async fn club_matches(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<Vec<MatchLine>, Error> {
        self.get(
            &format!("/clubs/{club}/matches"),
            &[season_param(season), ("last", last.to_string())],
        )
        .await
    }

    async fn club_form(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<FormSummary, Error> {
        self.get(
            &format!("/clubs/{club}/form"),
            &[season_param(season), ("last", last.to_string())],
        )
        .await
    }
}
