//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use fcsmtop::Trace;
#[cfg(debug_assertions)]
use fcsmtop::doc::ApiDoc;
use fcsmtop::inbound::http::clubs::{club_assists, club_form, club_matches, club_scorers};
use fcsmtop::inbound::http::health::{HealthState, health, live, ready};
use fcsmtop::inbound::http::national::{national_assists, national_scorers, national_standings};
use fcsmtop::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(national_scorers)
        .service(national_assists)
        .service(national_standings)
        .service(club_scorers)
        .service(club_assists)
        .service(club_matches)
        .service(club_form);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The health state is marked ready once the listener is bound, because the
/// record store has already been opened (and seeded) by the caller.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use fcsmtop::domain::ports::StoreKind;
    use fcsmtop::domain::{LeagueStatsService, Season, TRACE_ID_HEADER};
    use fcsmtop::outbound::memory::InMemoryLeagueRepository;
    use rstest::rstest;
    use std::sync::Arc;

    fn deps() -> AppDependencies {
        let store = InMemoryLeagueRepository::bundled().expect("bundled dataset");
        let stats = LeagueStatsService::new(Arc::new(store), "National");
        let season = Season::new("2025").expect("season");
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: web::Data::new(HttpState::new(Arc::new(stats), season, StoreKind::Memory)),
        }
    }

    #[rstest]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[case("/api/v1/national/classement")]
    #[case("/api/v1/clubs/fcsm/form")]
    #[actix_web::test]
    async fn routes_are_mounted_behind_trace(#[case] uri: &str) {
        let app = actix_test::init_service(build_app(deps())).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_routes_return_not_found() {
        let app = actix_test::init_service(build_app(deps())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/ligue1/buteurs")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bind_address_can_be_overridden() {
        let http_state = deps().http_state.get_ref().clone();
        let config = ServerConfig::new("0.0.0.0:8000".parse().expect("addr"), http_state)
            .with_bind_addr("127.0.0.1:0".parse().expect("addr"));
        assert_eq!(config.bind_addr().port(), 0);
    }
}
